//! Paints an [`AppViewModel`] with egui.
//!
//! Rendering never touches state: every interaction is returned as a [`Msg`]
//! for the caller to dispatch after the frame is laid out.

use eframe::egui::{self, Align2, Color32, RichText};
use scraper_core::{
    ApiUrlPromptView, AppViewModel, ContainerNode, ErrorView, FormView, HistoryPanelView,
    IntroView, Msg, ResultTab, ResultView, Screen, ScraperView, SectionView, ToastView, TreeEntry,
    TreeNode,
};

use super::constants::*;

const FEATURES: [(&str, &str); 4] = [
    ("Any Website", "Extract structured data from any publicly accessible URL"),
    ("Fast & Reliable", "Optimized scraping engine delivers results in seconds"),
    ("Structured JSON", "Get organized sections, metadata, links, and images"),
    ("Export Ready", "Download results as JSON for further processing"),
];

const FOOTER: &str = "Universal Scraper - Extract structured data from any website";

pub fn render(ctx: &egui::Context, view: &AppViewModel) -> Vec<Msg> {
    let mut out = Vec::new();

    match &view.screen {
        Screen::Loading(intro) => render_intro(ctx, intro),
        Screen::Landing => render_landing(ctx, &mut out),
        Screen::Scraper(scraper) => render_scraper(ctx, scraper, &mut out),
    }

    if let Some(toast) = &view.toast {
        render_toast(ctx, toast);
    }

    out
}

fn render_intro(ctx: &egui::Context, intro: &IntroView) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() / 2.0 - INTRO_FONT_SIZE).max(0.0));
            let mut text = RichText::new(&intro.text)
                .size(INTRO_FONT_SIZE)
                .monospace()
                .strong();
            if intro.fading {
                text = text.weak();
            }
            ui.label(text);
        });
    });
}

fn render_landing(ctx: &egui::Context, out: &mut Vec<Msg>) {
    render_footer(ctx);
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 5.0);
            ui.label(
                RichText::new(WINDOW_TITLE)
                    .size(INTRO_FONT_SIZE)
                    .strong(),
            );
            ui.add_space(12.0);
            ui.label(
                "Extract structured data from any website with a single click. \
                 Get organized sections, metadata, links, images, and more in clean JSON format.",
            );
            ui.add_space(24.0);
            let start = egui::Button::new(RichText::new("Start Scraping").size(18.0))
                .min_size(egui::vec2(200.0, 44.0));
            if ui.add(start).clicked() {
                out.push(Msg::GetStartedClicked);
            }
            ui.add_space(32.0);
        });

        ui.columns(FEATURES.len(), |columns| {
            for (column, (title, description)) in columns.iter_mut().zip(FEATURES) {
                column.vertical_centered(|ui| {
                    ui.label(RichText::new(title).strong());
                    ui.label(RichText::new(description).small().weak());
                });
            }
        });
    });
}

fn render_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(FOOTER).small().weak());
        });
    });
}

fn render_scraper(ctx: &egui::Context, view: &ScraperView, out: &mut Vec<Msg>) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("<").on_hover_text("Back").clicked() {
                out.push(Msg::BackClicked);
            }
            ui.heading(WINDOW_TITLE);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if view.history_count > 0 {
                    format!("History ({})", view.history_count)
                } else {
                    "History".to_string()
                };
                if ui
                    .selectable_label(view.history_panel.is_some(), label)
                    .clicked()
                {
                    out.push(Msg::HistoryToggled);
                }
            });
        });
    });
    render_footer(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if let Some(panel) = &view.history_panel {
                    render_history(ui, panel, out);
                    return;
                }

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Extract Structured Data").size(HEADING_FONT_SIZE).strong());
                    ui.label(
                        RichText::new(
                            "Enter a URL to scrape and analyze its content. Get organized sections, \
                             metadata, links, images, and more in clean JSON format.",
                        )
                        .weak(),
                    );
                });
                ui.add_space(16.0);

                render_form(ui, &view.form, out);

                if view.show_skeleton {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Scraping...").weak());
                    });
                }

                match &view.error {
                    Some(ErrorView::ConfigPrompt(prompt)) => render_api_prompt(ui, prompt, out),
                    Some(ErrorView::Banner(message)) => render_error_banner(ui, message, out),
                    None => {}
                }

                if view.viewing_saved {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Viewing saved result").color(COLOR_NOTICE));
                        if ui.button("Clear").clicked() {
                            out.push(Msg::SavedResultCleared);
                        }
                    });
                }

                if let Some(result) = &view.result {
                    ui.add_space(12.0);
                    render_result(ui, result, out);
                }
            });
    });
}

fn render_form(ui: &mut egui::Ui, form: &FormView, out: &mut Vec<Msg>) {
    let mut url = form.url.clone();
    let mut submit = false;

    ui.horizontal(|ui| {
        let input = ui.add_enabled(
            !form.loading,
            egui::TextEdit::singleline(&mut url)
                .hint_text("https://example.com")
                .desired_width(ui.available_width() - 120.0),
        );
        if input.changed() {
            out.push(Msg::UrlInputChanged(url.clone()));
        }
        if input.lost_focus() {
            out.push(Msg::UrlInputBlurred);
            submit |= ui.input(|i| i.key_pressed(egui::Key::Enter));
        }
        submit |= ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

        let label = if form.loading { "Scraping..." } else { "Scrape" };
        if ui
            .add_enabled(form.submit_enabled, egui::Button::new(label))
            .clicked()
        {
            submit = true;
        }
    });

    if form.show_validation_hint {
        ui.colored_label(COLOR_ERROR, "URL must start with http:// or https://");
    }
    if submit && form.submit_enabled {
        out.push(Msg::ScrapeSubmitted);
    }
}

fn render_api_prompt(ui: &mut egui::Ui, prompt: &ApiUrlPromptView, out: &mut Vec<Msg>) {
    ui.add_space(12.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("Backend API URL required").strong());
        ui.label(
            RichText::new(
                "Set your backend base URL (example: https://api.yoursite.com). \
                 It is saved in your local profile.",
            )
            .weak(),
        );

        let mut input = prompt.input.clone();
        ui.horizontal(|ui| {
            let edit = ui.add(
                egui::TextEdit::singleline(&mut input)
                    .hint_text("https://your-api.com")
                    .desired_width(ui.available_width() - 80.0),
            );
            if edit.changed() {
                out.push(Msg::ApiUrlInputChanged(input.clone()));
            }
            if edit.lost_focus() {
                out.push(Msg::ApiUrlInputBlurred);
            }
            if ui
                .add_enabled(prompt.save_enabled, egui::Button::new("Save"))
                .clicked()
            {
                out.push(Msg::ApiUrlSaveClicked);
            }
        });

        if prompt.show_validation_hint {
            ui.colored_label(COLOR_ERROR, "Must start with http:// or https://");
        }
        ui.label(
            RichText::new("Tip: SCRAPER_API_URL set at build or launch time takes precedence.")
                .small()
                .weak(),
        );
    });
}

fn render_error_banner(ui: &mut egui::Ui, message: &str, out: &mut Vec<Msg>) {
    ui.add_space(12.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Error").strong().color(COLOR_ERROR));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("x").on_hover_text("Dismiss").clicked() {
                    out.push(Msg::ErrorDismissed);
                }
            });
        });
        ui.label(message);
    });
}

fn render_history(ui: &mut egui::Ui, panel: &HistoryPanelView, out: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Scrape History ({})", panel.total)).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Close").clicked() {
                out.push(Msg::HistoryClosed);
            }
            if panel.total > 0 && ui.button("Clear all").clicked() {
                out.push(Msg::HistoryClearClicked);
            }
        });
    });

    let mut query = panel.query.clone();
    let search = ui.add(
        egui::TextEdit::singleline(&mut query)
            .hint_text("Search by URL or date...")
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        out.push(Msg::HistorySearchChanged(query));
    }
    ui.separator();

    if panel.total == 0 {
        ui.label(
            RichText::new("No scrape history yet. Results will appear here after your first scrape.")
                .weak(),
        );
        return;
    }
    if panel.rows.is_empty() {
        ui.label(RichText::new("No matching results").weak());
        return;
    }

    for row in &panel.rows {
        ui.horizontal(|ui| {
            let entry = ui
                .add(egui::Label::new(RichText::new(&row.url).strong()).sense(egui::Sense::click()))
                .on_hover_text("Open this result");
            ui.label(RichText::new(&row.scraped_at).small().weak());
            if entry.clicked() {
                out.push(Msg::HistorySelected { id: row.id.clone() });
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Delete").clicked() {
                    out.push(Msg::HistoryRemoveClicked { id: row.id.clone() });
                }
                if ui.small_button("Download JSON").clicked() {
                    out.push(Msg::HistoryDownloadClicked { id: row.id.clone() });
                }
            });
        });
    }
}

fn render_result(ui: &mut egui::Ui, result: &ResultView, out: &mut Vec<Msg>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Scrape Results").size(18.0).strong());
                if let Some(title) = &result.title {
                    ui.label(title.as_str());
                }
                ui.label(
                    RichText::new(format!("{} - {}", result.url, result.scraped_at))
                        .small()
                        .weak(),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Download JSON").clicked() {
                    out.push(Msg::DownloadJsonClicked);
                }
                if ui.button("Download Text").clicked() {
                    out.push(Msg::DownloadTextClicked);
                }
            });
        });
        ui.separator();

        ui.horizontal(|ui| {
            let sections = format!("Sections ({})", result.section_count);
            if ui
                .selectable_label(result.tab == ResultTab::Sections, sections)
                .clicked()
            {
                out.push(Msg::ResultTabSelected(ResultTab::Sections));
            }
            if ui
                .selectable_label(result.tab == ResultTab::RawJson, "Raw JSON")
                .clicked()
            {
                out.push(Msg::ResultTabSelected(ResultTab::RawJson));
            }
        });
        ui.add_space(8.0);

        match result.tab {
            ResultTab::Sections => render_sections(ui, &result.sections),
            ResultTab::RawJson => render_json(ui, result, out),
        }
    });

    if !result.errors.is_empty() {
        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(RichText::new("Scraping Warnings").strong().color(COLOR_ERROR));
            for error in &result.errors {
                ui.label(RichText::new(format!("- {error}")).weak());
            }
        });
    }
}

fn render_sections(ui: &mut egui::Ui, sections: &[SectionView]) {
    if sections.is_empty() {
        ui.label(RichText::new("No sections found in the scraped content.").weak());
        return;
    }
    for (index, section) in sections.iter().enumerate() {
        let header = format!("{}  [{}]", section.title, section.tag);
        egui::CollapsingHeader::new(header)
            .id_salt(("section", index))
            .show(ui, |ui| render_section(ui, section));
    }
}

fn render_section(ui: &mut egui::Ui, section: &SectionView) {
    if let Some(text) = &section.text {
        ui.label(text.as_str());
        ui.add_space(6.0);
    }

    if !section.headings.is_empty() {
        ui.label(RichText::new("Headings").strong().weak());
        for heading in &section.headings {
            ui.label(format!("- {heading}"));
        }
        ui.add_space(6.0);
    }

    if !section.links.is_empty() {
        ui.label(RichText::new(format!("Links ({})", section.links.total)).strong().weak());
        for link in &section.links.shown {
            ui.hyperlink_to(link.label.as_str(), &link.href);
        }
        if let Some(more) = section.links.overflow_label() {
            ui.label(RichText::new(more).small().weak());
        }
        ui.add_space(6.0);
    }

    if !section.images.is_empty() {
        ui.label(RichText::new(format!("Images ({})", section.images.total)).strong().weak());
        for image in &section.images.shown {
            ui.hyperlink_to(image.label.as_str(), &image.src);
        }
        if let Some(more) = section.images.overflow_label() {
            ui.label(RichText::new(more).small().weak());
        }
        ui.add_space(6.0);
    }

    if let Some(html) = &section.raw_html {
        ui.label(RichText::new("Raw HTML (truncated)").strong().weak());
        ui.label(RichText::new(html).monospace().small());
    }
}

fn render_json(ui: &mut egui::Ui, result: &ResultView, out: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        let label = if result.copied { "Copied!" } else { "Copy JSON" };
        if ui.button(label).clicked() {
            out.push(Msg::CopyJsonClicked);
        }
    });
    ui.add_space(6.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 2.0;
        ui.spacing_mut().indent = TREE_INDENT;
        render_tree_node(ui, None, &result.tree, out);
    });
}

fn render_tree_node(ui: &mut egui::Ui, key: Option<&str>, node: &TreeNode, out: &mut Vec<Msg>) {
    match node {
        TreeNode::Container(container) => render_container(ui, key, container, out),
        leaf => {
            ui.horizontal(|ui| {
                key_label(ui, key);
                ui.label(leaf_text(leaf));
            });
        }
    }
}

fn render_container(
    ui: &mut egui::Ui,
    key: Option<&str>,
    container: &ContainerNode,
    out: &mut Vec<Msg>,
) {
    ui.horizontal(|ui| {
        let arrow = if container.expanded { "v" } else { ">" };
        if ui.small_button(arrow).clicked() {
            out.push(Msg::TreeNodeToggled {
                path: container.path.clone(),
            });
        }
        key_label(ui, key);
        if container.expanded {
            ui.monospace(container.kind.open());
        } else {
            ui.monospace(format!(
                "{} {} {}",
                container.kind.open(),
                container.summary(),
                container.kind.close()
            ));
        }
    });

    if container.expanded {
        ui.indent(container.path.as_str(), |ui| {
            for TreeEntry { key, node } in &container.children {
                render_tree_node(ui, key.as_deref(), node, out);
            }
        });
        ui.monospace(container.kind.close());
    }
}

fn key_label(ui: &mut egui::Ui, key: Option<&str>) {
    if let Some(key) = key {
        ui.label(RichText::new(format!("\"{key}\":")).monospace().color(COLOR_KEY));
    }
}

fn leaf_text(node: &TreeNode) -> RichText {
    let text = node.literal().unwrap_or_default();
    let color = match node {
        TreeNode::Str { .. } => COLOR_STRING,
        TreeNode::Number(_) => COLOR_NUMBER,
        TreeNode::Bool(_) | TreeNode::Null => COLOR_KEYWORD,
        TreeNode::Empty(_) | TreeNode::Container(_) => Color32::GRAY,
    };
    RichText::new(text).monospace().color(color)
}

fn render_toast(ctx: &egui::Context, toast: &ToastView) {
    egui::Area::new(egui::Id::new("toast"))
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -48.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(&toast.title).strong());
                ui.label(toast.description.as_str());
            });
        });
}
