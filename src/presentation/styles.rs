//! Stylesheets. `APP_CSS` is rendered inline by the shell; `DASHBOARD_CSS`
//! is injected into `<head>` only while the war room is mounted.

pub const APP_CSS: &str = r#"
body {
    margin: 0;
    background: #0F1116;
    color: #fff;
    font-family: 'Inter', sans-serif;
}
a { color: inherit; text-decoration: none; }
.learndcx-app { min-height: 100vh; display: flex; flex-direction: column; }
.navbar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 32px;
    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
}
.brand {
    font-size: 22px;
    font-weight: 700;
    background: linear-gradient(to right, #3B82F6, #8B5CF6);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.nav-links { display: flex; gap: 20px; align-items: center; }
.nav-user { color: #94A3B8; }
.nav-button, .primary-button {
    background: linear-gradient(to right, #3B82F6, #8B5CF6);
    color: white;
    border: none;
    padding: 10px 24px;
    border-radius: 12px;
    font-weight: 600;
    cursor: pointer;
}
.primary-button:disabled { opacity: 0.5; cursor: default; }
.secondary-button {
    background: rgba(255, 255, 255, 0.05);
    color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 10px 24px;
    border-radius: 12px;
    cursor: pointer;
}
.page { max-width: 1100px; width: 100%; margin: 0 auto; padding: 40px 24px; box-sizing: border-box; }
.card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.06);
    border-radius: 16px;
    padding: 20px;
}
.hero { text-align: center; padding: 80px 24px 40px; }
.hero h1 { font-size: 48px; margin: 0 0 16px; }
.hero p { color: #94A3B8; font-size: 18px; }
.hero-actions { display: flex; gap: 16px; justify-content: center; margin-top: 32px; }
.ticker { display: grid; grid-template-columns: repeat(5, 1fr); gap: 16px; }
.ticker-symbol { color: #94A3B8; font-size: 14px; text-transform: uppercase; }
.ticker-price { font-size: 20px; font-weight: 600; margin: 6px 0; }
.grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.leaderboard-row { display: flex; justify-content: space-between; padding: 12px 0; }
.accent-yellow { color: #FACC15; }
.accent-blue { color: #3B82F6; }
.accent-purple { color: #8B5CF6; }
.accent-red { color: #EF4444; }
.accent-green { color: #10B981; }
.positive { color: #10B981; }
.negative { color: #EF4444; }
.form { display: flex; flex-direction: column; gap: 12px; max-width: 420px; margin: 0 auto; }
.form input, .form select {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 10px;
    color: #fff;
    padding: 10px 12px;
}
.form-error { color: #EF4444; }
.wizard-steps { display: flex; gap: 8px; justify-content: center; margin-bottom: 24px; }
.wizard-step { width: 32px; height: 32px; border-radius: 50%; display: grid; place-items: center; background: rgba(255, 255, 255, 0.05); }
.wizard-step.current { background: #3B82F6; }
.logo-picker { display: flex; gap: 8px; }
.logo-option { font-size: 24px; padding: 8px; border-radius: 10px; border: 1px solid transparent; background: none; cursor: pointer; }
.logo-option.selected { border-color: #3B82F6; }
.invite-code { font-family: monospace; font-size: 28px; letter-spacing: 4px; text-align: center; }
.order-panel { max-width: 480px; }
.order-type { display: flex; gap: 8px; }
.order-type button.selected { border-color: #3B82F6; }
.leverage-track { height: 6px; background: rgba(255, 255, 255, 0.1); border-radius: 3px; }
.leverage-fill { height: 100%; background: linear-gradient(to right, #3B82F6, #8B5CF6); border-radius: 3px; }
.side-buttons { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
.long-button { background: #10B981; color: #fff; border: none; padding: 12px; border-radius: 12px; cursor: pointer; }
.short-button { background: #EF4444; color: #fff; border: none; padding: 12px; border-radius: 12px; cursor: pointer; }
.confirmation { color: #10B981; }
.futures-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin: 24px 0; }
.futures-card { display: flex; flex-direction: column; gap: 12px; }
.futures-header { display: flex; justify-content: space-between; align-items: center; }
.futures-stats { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
.futures-stat { background: rgba(255, 255, 255, 0.05); border-radius: 10px; padding: 10px; }
.skeleton { background: #374151; border-radius: 6px; height: 20px; animation: pulse 1.5s infinite; }
@keyframes pulse { 50% { opacity: 0.5; } }
.grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.panel-row { display: flex; justify-content: space-between; font-size: 14px; padding: 4px 0; }
.signal-item { background: rgba(255, 255, 255, 0.05); border-radius: 10px; padding: 12px; margin-bottom: 10px; color: #D1D5DB; }
.icon-button { background: none; border: none; color: #3B82F6; cursor: pointer; font-size: 18px; }
"#;

/// War-room layout, removed again when the dashboard unmounts
pub const DASHBOARD_CSS: &str = r#"
.container {
    display: flex;
    flex: 1;
    flex-direction: row;
    height: calc(100vh - 70px);
    padding: 20px;
    gap: 20px;
    justify-content: space-between;
    position: relative;
    box-sizing: border-box;
}
.left, .right {
    width: 48%;
    background: linear-gradient(145.37deg, rgba(118, 118, 118, 0.06) 0%, rgba(44, 44, 44, 0.06) 100%);
    backdrop-filter: blur(10px);
    padding: 16px;
    border-radius: 24px;
    border: 1px solid rgba(255, 255, 255, 0.08);
    display: flex;
    flex-direction: column;
}
.tradingview-widget-container { width: 100%; height: 100%; }
#tradingview_btcusdt {
    width: 100%;
    height: 100%;
    border-radius: 16px;
    overflow: hidden;
}
.chart-container {
    flex: 1;
    min-height: 0;
    position: relative;
    border-radius: 16px;
    overflow: hidden;
}
#orderBookChart { width: 100%; height: 100%; }
.right h1 {
    text-align: center;
    color: #fff;
    margin-bottom: 16px;
    font-size: 24px;
    font-weight: 600;
    background: linear-gradient(to right, #3B82F6, #8B5CF6);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.metrics-container {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 16px;
    margin-top: 20px;
    padding: 0 10px;
}
.metric-card {
    background: rgba(255, 255, 255, 0.03);
    border-radius: 16px;
    padding: 16px;
    color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.06);
    transition: all 0.3s ease;
}
.metric-card:hover {
    transform: translateY(-2px);
    background: rgba(255, 255, 255, 0.05);
}
.metric-title { color: #94A3B8; font-size: 14px; margin-bottom: 8px; }
.metric-value {
    font-size: 20px;
    font-weight: 600;
    background: linear-gradient(to right, #3B82F6, #8B5CF6);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.metric-value.positive {
    background: linear-gradient(to right, #10B981, #34D399);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.metric-value.negative {
    background: linear-gradient(to right, #EF4444, #F87171);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.buttons-container {
    position: fixed;
    bottom: 30px;
    left: 0;
    right: 0;
    display: flex;
    justify-content: center;
    padding: 0 40px;
    align-items: center;
    pointer-events: none;
}
.enter-position-button, .l2-button {
    background: linear-gradient(to right, #3B82F6, #8B5CF6);
    color: white;
    border: none;
    padding: 16px 40px;
    font-size: 16px;
    font-weight: 600;
    border-radius: 16px;
    cursor: pointer;
    transition: all 0.3s ease;
    backdrop-filter: blur(10px);
    pointer-events: auto;
}
.l2-button { position: fixed; bottom: 30px; right: 40px; }
.enter-position-button:hover, .l2-button:hover {
    background: linear-gradient(to right, #2563EB, #7C3AED);
    transform: translateY(-2px);
    box-shadow: 0 12px 40px rgba(59, 130, 246, 0.3);
}
"#;
