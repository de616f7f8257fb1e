//! Standalone demo: opens a window with a seek bar and its value.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_seekbar::{seek_bar, SeekBarAttrs};
use tracing_subscriber::EnvFilter;

const ATTRS: &str = r##"{
    "thumb_size": 24,
    "thumb_stroke_size": 8,
    "thumb_color": "#FFFFFF",
    "thumb_stroke_color": "#3B82F6",
    "thumb_shadow_radius": 3,
    "thumb_shadow_color": "#40000000",
    "seek_bar_height": 6,
    "seek_bar_background_color": "#D0D0D0",
    "seek_bar_progress_color": "#3B82F6",
    "text_indicator_size": 12,
    "text_indicator_bottom": 4,
    "indicator_mode": "always_show",
    "text_indicator_float_scale_count": 1,
    "max": 100,
    "progress": 25
}"##;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let attrs = SeekBarAttrs::from_json(ATTRS).unwrap();
    let (style, state) = attrs.resolve().unwrap();
    let progress = RwSignal::new(state.progress());

    floem::Application::new()
        .window(
            move |_| {
                let bar = seek_bar(progress, style.clone(), state.max()).unwrap();
                v_stack((
                    bar.style(|s| s.padding_horiz(8.0)),
                    label(move || format!("value: {:.1}", progress.get())),
                ))
                .style(|s| s.gap(8.0).padding(16.0).size_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 140.0))
                    .title("floem-seekbar"),
            ),
        )
        .run();
}
