//! Room card: current temperature and a progress bar for one sensor.

use homepanel_domain::room::{RoomDescriptor, RoomReading};
use leptos::prelude::*;

/// CSS width of the progress bar for `reading`.
fn bar_width(reading: RoomReading) -> String {
    format!("{}%", reading.bar_percent())
}

/// A card displaying one room's reading.
#[component]
pub fn RoomCard(
    /// Where and how the room is rendered.
    room: RoomDescriptor,
    /// Latest reading of the room's sensor.
    #[prop(into)]
    reading: Signal<RoomReading>,
) -> impl IntoView {
    view! {
        <div class="room-card">
            <span class="room-label">{room.label}</span>
            <span id=room.display_id class="room-value">
                {move || reading.get().text()}
            </span>
            <div class="progress">
                <div
                    id=room.bar_id
                    class=room.bar_class()
                    role="progressbar"
                    style:width=move || bar_width(reading.get())
                ></div>
            </div>
        </div>
    }
}
