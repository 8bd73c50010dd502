use std::sync::LazyLock;

use regex::Regex;

use crate::config::CounterSettings;

static COUNTER_TEXT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9,]+)(\+?)$").ok());

/// Final value of a statistic such as `12,000+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub suffix: String,
}

impl CounterTarget {
    /// `None` when the text is not a plain (comma grouped) number with an
    /// optional trailing `+`.
    pub fn parse(text: &str) -> Option<Self> {
        let captures = COUNTER_TEXT.as_ref()?.captures(text.trim())?;
        let value = captures[1].replace(',', "").parse().ok()?;
        Some(Self {
            value,
            suffix: captures[2].to_string(),
        })
    }

    pub fn display(&self) -> String {
        format!("{}{}", group_thousands(self.value), self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Linear count-up from zero, one step per tick.
#[derive(Debug, Clone)]
pub struct CounterTween {
    target: CounterTarget,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterTween {
    pub fn new(target: CounterTarget, settings: &CounterSettings) -> Self {
        let ticks = f64::from(settings.duration_ms) / f64::from(settings.tick_ms.max(1));
        #[allow(clippy::cast_precision_loss)]
        let step = target.value as f64 / ticks;
        Self {
            target,
            step,
            current: 0.0,
            finished: false,
        }
    }

    /// Advances one tick. The last frame shows exactly the target.
    pub fn tick(&mut self) -> CounterFrame {
        if self.finished {
            return self.final_frame();
        }

        self.current += self.step;
        #[allow(clippy::cast_precision_loss)]
        let target = self.target.value as f64;
        if self.current >= target {
            self.finished = true;
            return self.final_frame();
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shown = (self.current.floor() as u64).min(self.target.value);
        CounterFrame {
            text: format!("{}{}", group_thousands(shown), self.target.suffix),
            finished: false,
        }
    }

    fn final_frame(&self) -> CounterFrame {
        CounterFrame {
            text: self.target.display(),
            finished: true,
        }
    }
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
