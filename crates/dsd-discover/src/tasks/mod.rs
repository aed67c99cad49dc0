mod poller;
pub use poller::poll;
