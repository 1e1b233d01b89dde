//! The cuisine browser page.
//!
//! Sidebar with the filter controls, a header with the wish list toggle, and
//! the result cards. Results only change when "Apply Filters" is pressed.

use crate::formatters::{format_cuisine_details, NO_RESULTS_MESSAGE};
use crate::models::{MAX_RATING, MIN_RATING};
use crate::sort::SortField;
use crate::ui::components::WishListWindow;
use crate::ui::state::BrowserState;
use eframe::egui;

const BOOKING_URL: &str = "https://forms.office.com/";
const REVIEW_URL: &str = "https://forms.office.com/";

pub struct BrowserScreen;

impl BrowserScreen {
    const IMAGE_MAX_HEIGHT: f32 = 220.0;

    pub fn show(ctx: &egui::Context, state: &mut BrowserState) {
        if let Some(images) = state.images.as_mut() {
            images.poll(ctx);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            Self::show_header(ui, state);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small("© 2024 Local Cuisines. All rights reserved.");
            });
        });

        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    Self::show_filter_controls(ui, state);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            Self::show_results(ctx, ui, state);
        });

        if state.show_wish_list {
            WishListWindow::new(&state.wish_list, &mut state.show_wish_list).show(ctx);
        }
    }

    fn show_header(ui: &mut egui::Ui, state: &mut BrowserState) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading("🍲 Local Cuisines");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = format!("❤ Wish List ({})", state.wish_list.len());
                if ui.selectable_label(state.show_wish_list, label).clicked() {
                    state.show_wish_list = !state.show_wish_list;
                }
            });
        });
        ui.label(egui::RichText::new("Explore the Flavors of the World").strong());
        ui.label("Discover local dishes and their specialties from various regions.");
        ui.add_space(6.0);
    }

    fn show_filter_controls(ui: &mut egui::Ui, state: &mut BrowserState) {
        ui.heading("Filter Cuisines");
        ui.add_space(10.0);

        // Region multi-select
        ui.label("Region");
        ui.horizontal(|ui| {
            if ui.small_button("All").clicked() {
                state.filter.regions = state.region_options.iter().cloned().collect();
            }
            if ui.small_button("None").clicked() {
                state.filter.regions.clear();
            }
        });
        for region in state.region_options.clone() {
            let mut selected = state.filter.regions.contains(&region);
            if ui.checkbox(&mut selected, region.as_str()).changed() {
                state.toggle_region(&region, selected);
            }
        }
        ui.add_space(10.0);

        // Price range, bounded by the observed prices
        let (lo, hi) = state.price_bounds;
        ui.label("Price Range (₹)");
        let min_changed = ui
            .add(egui::Slider::new(&mut state.filter.min_price, lo..=hi).text("min"))
            .changed();
        let max_changed = ui
            .add(egui::Slider::new(&mut state.filter.max_price, lo..=hi).text("max"))
            .changed();
        if min_changed || max_changed {
            state.clamp_price_range();
        }
        ui.add_space(10.0);

        egui::ComboBox::from_label("Minimum Star Rating")
            .selected_text(state.filter.min_rating.to_string())
            .show_ui(ui, |ui| {
                for rating in MIN_RATING..=MAX_RATING {
                    ui.selectable_value(&mut state.filter.min_rating, rating, rating.to_string());
                }
            });
        ui.add_space(10.0);

        ui.label("Search Specialty");
        ui.add(
            egui::TextEdit::singleline(&mut state.filter.specialty_query)
                .hint_text("e.g. curry")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        egui::ComboBox::from_label("Sort by")
            .selected_text(state.sort_field.label())
            .show_ui(ui, |ui| {
                for &field in SortField::all() {
                    ui.selectable_value(&mut state.sort_field, field, field.label());
                }
            });
        ui.add_space(15.0);

        if ui.button("Apply Filters").clicked() {
            state.apply_filters();
        }
    }

    fn show_results(ctx: &egui::Context, ui: &mut egui::Ui, state: &mut BrowserState) {
        if let Some(notice) = &state.notice {
            let color = if notice.added {
                egui::Color32::from_rgb(0, 140, 60)
            } else {
                ui.visuals().weak_text_color()
            };
            ui.colored_label(color, notice.text.as_str());
            ui.add_space(5.0);
        }

        let Some(results) = state.results.clone() else {
            ui.label("Choose your filters in the sidebar and press \"Apply Filters\".");
            return;
        };

        if results.is_empty() {
            ui.label(NO_RESULTS_MESSAGE);
            return;
        }

        ui.heading(format!("Filtered Cuisines ({})", results.len()));
        if let Some(loading) = state.images.as_ref().map(|i| i.loading_count()) {
            if loading > 0 {
                ui.label(egui::RichText::new(format!("Loading {loading} images...")).weak());
            }
        }

        let mut add_clicked: Option<usize> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for &index in &results {
                    let Some(record) = state.table.get(index) else {
                        continue;
                    };
                    let on_list = state.wish_list.contains(&record.name);

                    ui.separator();
                    ui.push_id(index, |ui| {
                        ui.columns(2, |columns| {
                            // Left column: details and actions
                            let left = &mut columns[0];
                            left.heading(record.name.as_str());
                            for (label, value) in format_cuisine_details(record) {
                                left.horizontal_wrapped(|ui| {
                                    ui.strong(format!("{label}:"));
                                    ui.label(value);
                                });
                            }
                            left.add_space(5.0);

                            let button = egui::Button::new(format!(
                                "Add {} to Wish List",
                                record.name
                            ));
                            left.horizontal(|ui| {
                                if ui.add(button).clicked() {
                                    add_clicked = Some(index);
                                }
                                if on_list {
                                    ui.label(egui::RichText::new("✓ on your list").weak());
                                }
                            });
                            left.hyperlink_to("👆 Book a Tasting Experience", BOOKING_URL);
                            left.hyperlink_to("📝 Add a Review", REVIEW_URL);

                            // Right column: image
                            let right = &mut columns[1];
                            if let (Some(url), Some(images)) =
                                (record.image_url.as_deref(), state.images.as_mut())
                            {
                                if let Some(texture) = images.texture(ctx, url) {
                                    let [w, h] = texture.size();
                                    let aspect = h as f32 / w.max(1) as f32;
                                    let width = right
                                        .available_width()
                                        .min(Self::IMAGE_MAX_HEIGHT / aspect.max(0.01));
                                    right.image((texture.id(), egui::vec2(width, width * aspect)));
                                    right.small(record.name.as_str());
                                } else if images.has_failed(url) {
                                    right.label(egui::RichText::new("Image unavailable").weak());
                                } else {
                                    right.label(egui::RichText::new("Loading...").weak());
                                }
                            }
                        });
                    });
                }
                ui.separator();
            });

        if let Some(index) = add_clicked {
            state.add_to_wish_list(index);
        }
    }
}
