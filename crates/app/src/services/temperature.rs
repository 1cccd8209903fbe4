//! Temperature poll task.

use homepanel_domain::room::{ROOM_COUNT, RoomReading};

use crate::poller::Poller;
use crate::ports::{PanelApi, PanelView, Scheduler};

impl<A, V, F, S> Poller<A, V, F, S>
where
    A: PanelApi,
    V: PanelView,
    S: Scheduler,
{
    /// Fetch the readout once and render every room.
    ///
    /// Fields that are not numbers render the reading placeholder; a failed
    /// fetch renders the server placeholder in every room.
    pub async fn poll_temperatures(&self) {
        match self.api.fetch_temperatures().await {
            Ok(readout) => {
                tracing::debug!("temperature readout received");
                for (index, reading) in readout.readings().into_iter().enumerate() {
                    self.view.render_room(index, reading);
                }
            }
            Err(err) => {
                tracing::warn!(%err, "temperature refresh failed");
                for index in 0..ROOM_COUNT {
                    self.view.render_room(index, RoomReading::ServerError);
                }
            }
        }
    }
}
