//! Inline styles - the host page stylesheet may refine them

/// Base style of the floating tooltip overlay
pub fn tooltip_style() -> &'static str {
    "opacity: 0; \
     position: absolute; \
     pointer-events: none; \
     background: rgba(0, 0, 0, 0.7); \
     color: #fff; \
     border-radius: 3px; \
     font-size: 12px; \
     transform: translate(-50%, 0); \
     z-index: 10;"
}

/// `outline` of a chart placeholder whose load failed
pub fn failed_outline() -> &'static str {
    "1px dashed #e00"
}
