//! Dashboard configuration

/// Name of the `<meta>` tag that overrides the API base URL
pub const API_BASE_META: &str = "cutsim-bench-api";

/// Settings of the browser dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix of every API URL; empty means same-origin
    pub api_base: String,
    /// Size of the canvas created for a single-file chart
    pub file_canvas: (u32, u32),
    /// Size of each summary canvas
    pub summary_canvas: (u32, u32),
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            file_canvas: (500, 150),
            summary_canvas: (500, 100),
        }
    }
}

impl DashboardConfig {
    /// Apply the content of the override `<meta>` tag, if any
    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base.map(|b| b.trim().to_string()) {
            if !base.is_empty() {
                self.api_base = base;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.file_canvas, (500, 150));
        assert_eq!(config.summary_canvas, (500, 100));
    }

    #[test]
    fn test_api_base_override() {
        let config = DashboardConfig::default().with_api_base(Some(" http://bench:8000 ".into()));
        assert_eq!(config.api_base, "http://bench:8000");

        let config = DashboardConfig::default().with_api_base(Some("   ".into()));
        assert_eq!(config.api_base, "");

        let config = DashboardConfig::default().with_api_base(None);
        assert_eq!(config.api_base, "");
    }
}
