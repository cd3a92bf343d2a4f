use super::event::Event;

/// Destination for episode [`Event`]s.
///
/// Injected into each [`Episode`](super::episode::Episode) instead of relying
/// on process-wide state. `()` discards everything.
pub trait Sink {
    fn record(&mut self, event: Event);
}

impl Sink for () {
    fn record(&mut self, _: Event) {}
}

/// Forwards events to the `log` facade.
///
/// Targets are only ever written at DEBUG.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Sink for Logger {
    fn record(&mut self, event: Event) {
        match event {
            Event::Stepped { done: true, .. } => log::info!("{}", event),
            _ => log::debug!("{}", event),
        }
    }
}

/// Keeps every event in memory, in order.
#[derive(Debug, Default, Clone)]
pub struct Recorder(Vec<Event>);

impl Recorder {
    pub fn events(&self) -> &[Event] {
        &self.0
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Sink for Recorder {
    fn record(&mut self, event: Event) {
        self.0.push(event);
    }
}

impl<S> Sink for &mut S
where
    S: Sink + ?Sized,
{
    fn record(&mut self, event: Event) {
        (**self).record(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order() {
        let mut recorder = Recorder::default();
        recorder.record(Event::Seeded { seed: 1 });
        recorder.record(Event::Seeded { seed: 2 });
        assert_eq!(
            recorder.events(),
            &[Event::Seeded { seed: 1 }, Event::Seeded { seed: 2 }]
        );
        recorder.clear();
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn borrowed_sink_forwards() {
        fn feed<S: Sink>(mut sink: S) {
            sink.record(Event::Seeded { seed: 7 });
        }
        let mut recorder = Recorder::default();
        feed(&mut recorder);
        feed(&mut recorder);
        assert_eq!(recorder.events().len(), 2);
    }
}
