//! Frame bar demo: one continuous and one discrete bar
//!
//! Drag either bar: the pointer stays put while the marker strip scrolls
//! beneath it. Run with `RUST_LOG=debug` for drag tracing.

use iced::widget::{column, container, text};
use iced::{Color, Element, Length, Size, Task};

use framebar_widgets::{
    CoercePointer, FrameBar, FrameBarChange, FrameBarEvent, Marker, PointerSelection,
};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("framebar-demo starting up");

    iced::application(move || (App::new(), Task::none()), update, view)
        .title("Frame Bar Demo")
        .window_size(Size::new(480.0, 280.0))
        .run()
}

const ACCENT: Color = Color::from_rgb(0.3, 0.7, 0.9);

struct App {
    continuous: FrameBar,
    discrete: FrameBar,
    value: f32,
    frame: usize,
}

#[derive(Debug, Clone)]
enum Message {
    Continuous(FrameBarEvent),
    Discrete(FrameBarEvent),
}

impl App {
    fn new() -> Self {
        // Tall accent tick every fourth marker, like a film-strip ruler
        let ticks: Vec<Marker> = (0..32)
            .map(|i| {
                if i % 4 == 0 {
                    Marker::new(8.0, 24.0).with_color(ACCENT)
                } else {
                    Marker::new(8.0, 14.0).with_top_offset(5.0)
                }
            })
            .collect();

        let frames: Vec<Marker> = (0..12)
            .map(|i| {
                let shade = 0.35 + 0.04 * (i % 6) as f32;
                Marker::new(24.0, 30.0).with_color(Color::from_rgb(shade, shade, shade))
            })
            .collect();

        let continuous = FrameBar::continuous(Marker::default_pointer(), ticks)
            .with_value_range(0.0..=100.0)
            .with_coerced_pointer(CoercePointer::Coerced);

        let discrete = FrameBar::discrete(Marker::default_pointer(), frames)
            .with_pointer_selection(PointerSelection::Center);

        Self {
            continuous,
            discrete,
            value: 0.0,
            frame: 0,
        }
    }
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Continuous(event) => match app.continuous.handle_event(event) {
            Some(FrameBarChange::ValueChanged(value)) => app.value = value,
            Some(FrameBarChange::DragStarted) => log::debug!("continuous drag started"),
            Some(FrameBarChange::DragFinished) => log::debug!("continuous drag finished"),
            _ => {}
        },
        Message::Discrete(event) => match app.discrete.handle_event(event) {
            Some(FrameBarChange::IndexChanged(index)) => app.frame = index,
            Some(FrameBarChange::DragStarted) => log::debug!("discrete drag started"),
            Some(FrameBarChange::DragFinished) => log::debug!("discrete drag finished"),
            _ => {}
        },
    }
    Task::none()
}

fn view(app: &App) -> Element<'_, Message> {
    let content = column![
        text(format!("value: {:.1}", app.value)).size(14),
        app.continuous.view(Message::Continuous),
        text(format!("frame: {}", app.frame)).size(14),
        app.discrete.view(Message::Discrete),
    ]
    .spacing(16)
    .padding(24);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
