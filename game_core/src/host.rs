use crate::resources::Deferred;

/// Capabilities the environment provides to the game (logging, timers).
///
/// The browser client backs this with the console and `setTimeout`; tests use
/// an in-memory mock.
pub trait Host {
    fn log(&self, msg: String);

    /// Run `effect` against the game after roughly `delay_ms`
    fn schedule_after(&self, delay_ms: u32, effect: Deferred);
}
