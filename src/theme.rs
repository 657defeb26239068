//! Visual Theme
//!
//! Shared color constants and the global stylesheet. These are the only
//! values the dashboard view and the ask panel have in common. The full
//! palette (navy background `#0A1628`, body text `#F1F5F9`) lives in
//! `GLOBAL_CSS`; only the colors the canvas renderer needs are constants.

/// Card and panel surfaces, also the chart background.
pub const SLATE: &str = "#1E293B";
/// Primary accent, also the exchange-rate series color.
pub const GOLD: &str = "#D4AF37";
/// Secondary text and axis labels.
pub const MUTED: &str = "#94A3B8";

/// Repo-rate series color.
pub const GREEN: &str = "#10B981";
/// Inflation series color.
pub const AMBER: &str = "#F59E0B";
/// GDP-growth series color.
pub const BLUE: &str = "#3B82F6";

/// Global stylesheet injected once at the app root.
pub const GLOBAL_CSS: &str = r#"
* { box-sizing: border-box; }
html, body {
  margin: 0;
  min-height: 100vh;
  background: #0A1628;
  color: #F1F5F9;
  font-family: system-ui, -apple-system, sans-serif;
}

.app-header {
  padding: 24px;
  border-bottom: 1px solid #1E293B;
  display: flex;
  justify-content: space-between;
  align-items: center;
  flex-wrap: wrap;
  gap: 16px;
}
.app-header h1 { margin: 0; font-size: 22px; }
.accent { color: #D4AF37; }

.app-main { padding: 24px; max-width: 1200px; margin: 0 auto; }

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 16px;
  margin-bottom: 32px;
}
.indicator-card { background: #1E293B; border-radius: 12px; padding: 20px; }
.indicator-icon { font-size: 28px; margin-bottom: 8px; }
.indicator-name {
  color: #94A3B8;
  font-size: 12px;
  text-transform: uppercase;
  margin-bottom: 4px;
}
.indicator-value { font-size: 28px; font-weight: bold; color: #D4AF37; }
.indicator-unit { font-size: 14px; color: #94A3B8; }
.indicator-description { color: #94A3B8; font-size: 13px; margin-top: 8px; }

.section-label {
  color: #94A3B8;
  font-size: 14px;
  text-transform: uppercase;
  margin-bottom: 16px;
}
.trend-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 16px;
}
.trend-card { background: #1E293B; border-radius: 12px; padding: 16px; }
.trend-card h3 { margin: 0 0 12px; font-size: 14px; }
.trend-canvas { width: 100%; height: 150px; }
.no-data { color: #94A3B8; }

.btn-primary {
  padding: 10px 20px;
  background: #D4AF37;
  border: none;
  border-radius: 8px;
  color: #0A1628;
  font-weight: bold;
  cursor: pointer;
}
.btn-primary:disabled { background: #1E293B; color: #94A3B8; cursor: wait; }

.ask-panel {
  position: fixed;
  top: 0;
  right: 0;
  width: 360px;
  height: 100vh;
  background: #0A1628;
  border-left: 1px solid #1E293B;
  padding: 20px;
  overflow-y: auto;
}
.ask-header { display: flex; justify-content: space-between; margin-bottom: 20px; }
.ask-header h2 { margin: 0; color: #D4AF37; }
.ask-close {
  background: none;
  border: none;
  color: #94A3B8;
  font-size: 24px;
  cursor: pointer;
}
.ask-input {
  width: 100%;
  padding: 12px;
  background: #1E293B;
  border: none;
  border-radius: 8px;
  color: #F1F5F9;
  margin-bottom: 12px;
}
.ask-submit { width: 100%; padding: 12px; }
.ask-answer {
  margin-top: 20px;
  padding: 16px;
  background: #1E293B;
  border-radius: 8px;
  line-height: 1.6;
}
.ask-meta { margin-top: 8px; color: #94A3B8; font-size: 12px; }
.ask-suggestions { margin-top: 20px; }
.ask-suggestions p { color: #94A3B8; font-size: 12px; margin-bottom: 8px; }
.ask-suggestion {
  display: block;
  width: 100%;
  padding: 8px;
  margin-bottom: 6px;
  background: transparent;
  border: 1px solid #1E293B;
  border-radius: 6px;
  color: #F1F5F9;
  text-align: left;
  cursor: pointer;
  font-size: 13px;
}
.ask-suggestion:hover { border-color: #D4AF37; }

.loading-spinner {
  width: 32px;
  height: 32px;
  border: 3px solid #1E293B;
  border-top-color: #D4AF37;
  border-radius: 50%;
  animation: spin 0.9s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.loading-row { display: flex; justify-content: center; padding: 48px 0; }
"#;
