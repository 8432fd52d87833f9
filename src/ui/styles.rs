use {
    crate::{
        config::PLOT_CONFIG,
        models::{EventKind, IndicatorStatus},
        ui::UI_CONFIG,
    },
    eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, RichText, Ui, Visuals},
};

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Formats a price with "Trader Precision":
/// 2 decimals at or above $1, 4 below (sub-dollar alts need the extra digits).
pub fn format_price(price: f64) -> String {
    if price.abs() < 1.0 {
        format!("${:.4}", price)
    } else {
        format!("${:.2}", price)
    }
}

pub fn format_volume_millions(volume: f64) -> String {
    format!("${:.2}M", volume / 1_000_000.0)
}

pub fn format_change_pct(pct: f64) -> String {
    format!("{:+.2}%", pct)
}

pub fn status_color(status: IndicatorStatus) -> Color32 {
    match status {
        IndicatorStatus::Bullish => PLOT_CONFIG.color_gain,
        IndicatorStatus::Bearish => PLOT_CONFIG.color_loss,
        IndicatorStatus::Neutral => PLOT_CONFIG.color_neutral,
    }
}

pub fn change_color(pct: f64) -> Color32 {
    if pct >= 0.0 {
        PLOT_CONFIG.color_gain
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub fn event_badge_color(kind: EventKind) -> Color32 {
    match kind {
        EventKind::HighVolume => PLOT_CONFIG.badge_high_volume,
        EventKind::Divergence => PLOT_CONFIG.badge_divergence,
        EventKind::EmaCross => PLOT_CONFIG.badge_ema_cross,
        EventKind::Oversold => PLOT_CONFIG.badge_oversold,
        EventKind::Overbought => PLOT_CONFIG.badge_overbought,
    }
}

/// Small pill label, e.g. event kind tags and the 24h change badge.
pub(crate) fn badge(ui: &mut Ui, text: &str, fill: Color32) {
    Frame {
        fill: fill.linear_multiply(0.25),
        corner_radius: CornerRadius::same(4),
        inner_margin: Margin::symmetric(6, 2),
        ..Default::default()
    }
    .show(ui, |ui| {
        ui.label(RichText::new(text).small().strong().color(fill));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_dollar_prices_get_four_decimals() {
        assert_eq!(format_price(0.52), "$0.5200");
        assert_eq!(format_price(43250.0), "$43250.00");
    }

    #[test]
    fn change_is_signed() {
        assert_eq!(format_change_pct(1.234), "+1.23%");
        assert_eq!(format_change_pct(-0.5), "-0.50%");
    }

    #[test]
    fn volume_is_reported_in_millions() {
        assert_eq!(format_volume_millions(12_340_000.0), "$12.34M");
    }
}
