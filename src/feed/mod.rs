mod accumulator;
mod cursor;
mod registry;
mod snapshot;

pub use accumulator::HitFeed;
pub use cursor::PageCursor;
pub use registry::FeedRegistry;
pub use snapshot::FeedSnapshot;
