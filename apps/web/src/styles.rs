use voces_core::error::{SiteError, SiteResult};
use web_sys::Document;

use crate::dom::js_failure;

/// Rules the animations rely on. Revealed elements override the inline
/// start state set before observation.
pub const STYLESHEET: &str = r"
.animate-in {
  opacity: 1 !important;
  transform: translateY(0) !important;
}

.language-card:hover {
  transform: translateY(-10px) !important;
}

.timeline-item {
  transition: all 0.5s ease;
}

.loading {
  position: relative;
  overflow: hidden;
}

.loading::after {
  content: '';
  position: absolute;
  top: 0;
  left: -100%;
  width: 100%;
  height: 100%;
  background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.4), transparent);
  animation: shimmer 1.5s infinite;
}

@keyframes shimmer {
  100% {
    left: 100%;
  }
}

@keyframes fadeIn {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.fade-in {
  animation: fadeIn 0.6s ease forwards;
}
";

/// Appends [`STYLESHEET`] to `head`.
pub fn inject(document: &Document) -> SiteResult<()> {
    let head = document
        .head()
        .ok_or_else(|| SiteError::surface("document.head", "document has no head"))?;
    let style = document
        .create_element("style")
        .map_err(|error| js_failure("createElement(style)", &error))?;
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)
        .map(|_| ())
        .map_err(|error| js_failure("appendChild(style)", &error))
}
