use {
    crate::{
        config::PLOT_CONFIG,
        models::EventFeed,
        ui::{
            UI_TEXT,
            styles::{badge, event_badge_color, format_price},
        },
        utils::epoch_ms_to_clock_string,
    },
    eframe::egui::{Align, Layout, RichText, ScrollArea, Ui},
};

/// The shared feed of recent market events, newest first.
pub(crate) struct EventsFeedPanel<'a> {
    events: &'a EventFeed,
}

impl<'a> EventsFeedPanel<'a> {
    pub(crate) fn new(events: &'a EventFeed) -> Self {
        Self { events }
    }

    pub(crate) fn render(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(UI_TEXT.heading_events).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        self.events.len(),
                        UI_TEXT.events_count_suffix
                    ))
                    .small()
                    .color(PLOT_CONFIG.color_text_subdued),
                );
            });
        });
        ui.separator();

        if self.events.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(UI_TEXT.events_waiting).color(PLOT_CONFIG.color_text_subdued),
                );
                ui.add_space(12.0);
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height(180.0)
            .show(ui, |ui| {
                for event in self.events.iter() {
                    ui.horizontal(|ui| {
                        badge(ui, event.kind.label(), event_badge_color(event.kind));
                        ui.label(RichText::new(event.pair.display_name()).strong());
                        ui.label(
                            RichText::new(&event.description)
                                .small()
                                .color(PLOT_CONFIG.color_text_subdued),
                        );
                        ui.label(
                            RichText::new(format_price(event.price))
                                .small()
                                .monospace()
                                .color(PLOT_CONFIG.color_text_primary),
                        );
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(epoch_ms_to_clock_string(event.timestamp_ms))
                                    .small()
                                    .monospace()
                                    .color(PLOT_CONFIG.color_text_subdued),
                            );
                        });
                    });
                }
            });
    }
}
