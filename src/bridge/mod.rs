mod sync_bridge;

pub use sync_bridge::SyncBridge;
