use crate::fps_monitor::FpsMonitor;
use crate::host::{Host, ListenerId, PixelSink, Tickable};
use crate::screen::Frame;
use crate::{Error, Result};
use embedded_time::duration::Microseconds;
use log::{debug, info, trace, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepStatus(pub u8);

pub trait Engine {
    fn step(&mut self, frame: &mut Frame) -> StepStatus;
}

enum State<S> {
    Stopped,
    Running { surface: S, listener: ListenerId },
}

pub struct FrameAdapter<E, H: Host> {
    engine: E,
    frame: Frame,
    state: State<H::Surface>,
    fps: FpsMonitor,
    frames: u32,
    last_status: Option<StepStatus>,
}

impl<E: Engine, H: Host> FrameAdapter<E, H> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            frame: Frame::new(),
            state: State::Stopped,
            fps: FpsMonitor::new(),
            frames: 0,
            last_status: None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn last_status(&self) -> Option<StepStatus> {
        self.last_status
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.fps.last_fps()
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}

impl<E: Engine, H: Host> Tickable<H> for FrameAdapter<E, H> {
    fn start(&mut self, host: &mut H) -> Result<()> {
        if self.is_running() {
            debug!("adapter already running, start ignored");
            return Ok(());
        }
        let surface = host.acquire_surface().ok_or(Error::SurfaceUnavailable)?;
        let listener = match host.add_listener() {
            Ok(listener) => listener,
            Err(e) => {
                if host.release_surface(surface).is_err() {
                    warn!("host refused the surface back");
                }
                return Err(e);
            }
        };
        info!("adapter started, listener {}", listener.raw());
        self.state = State::Running { surface, listener };
        Ok(())
    }

    fn stop(&mut self, host: &mut H) {
        match core::mem::replace(&mut self.state, State::Stopped) {
            State::Stopped => debug!("adapter not running, stop ignored"),
            State::Running { surface, listener } => {
                host.remove_listener(listener);
                if host.release_surface(surface).is_err() {
                    warn!("host refused the surface back");
                }
                info!("adapter stopped after {} frames", self.frames);
            }
        }
    }

    fn listener(&self) -> Option<ListenerId> {
        match self.state {
            State::Running { listener, .. } => Some(listener),
            State::Stopped => None,
        }
    }

    fn on_tick(&mut self, elapsed: Microseconds<u32>) {
        let surface = match &mut self.state {
            State::Running { surface, .. } => surface,
            State::Stopped => {
                debug!("tick while stopped");
                return;
            }
        };
        let status = self.engine.step(&mut self.frame);
        trace!("step status {}", status.0);
        self.frame.blit(surface);
        surface.commit();
        self.last_status = Some(status);
        self.frames = self.frames.wrapping_add(1);
        self.fps.update(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::tests::CountingSink;
    use crate::host::LoopManager;
    use crate::screen::{SCREEN_HEIGHT, SCREEN_WIDTH};

    type TestHost = LoopManager<CountingSink, 2>;

    #[derive(Default)]
    struct CountingEngine {
        steps: u8,
    }

    impl Engine for CountingEngine {
        fn step(&mut self, frame: &mut Frame) -> StepStatus {
            self.steps += 1;
            frame.fill(self.steps);
            frame.set_pixel(1, 0, 200);
            StepStatus(self.steps * 2)
        }
    }

    fn adapter() -> FrameAdapter<CountingEngine, TestHost> {
        FrameAdapter::new(CountingEngine::default())
    }

    #[test]
    fn test_stop_before_start_is_harmless() {
        let mut host = TestHost::new(CountingSink::default());
        let mut adapter = adapter();
        adapter.stop(&mut host);
        assert!(!adapter.is_running());
        assert!(host.surface().is_some());
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_double_start_registers_once() {
        let mut host = TestHost::new(CountingSink::default());
        let mut adapter = adapter();
        adapter.start(&mut host).unwrap();
        adapter.start(&mut host).unwrap();
        assert!(adapter.is_running());
        assert_eq!(host.listener_count(), 1);
        assert!(host.surface().is_none());

        adapter.stop(&mut host);
        assert!(!adapter.is_running());
        assert_eq!(host.listener_count(), 0);
        assert!(host.surface().is_some());
    }

    #[test]
    fn test_start_without_surface_stays_stopped() {
        let mut host = TestHost::new(CountingSink::default());
        let held = host.acquire_surface().unwrap();
        let mut adapter = adapter();
        assert_eq!(adapter.start(&mut host), Err(Error::SurfaceUnavailable));
        assert!(!adapter.is_running());
        assert_eq!(host.listener_count(), 0);
        host.release_surface(held).ok().unwrap();
    }

    #[test]
    fn test_start_with_full_table_returns_surface() {
        let mut host = TestHost::new(CountingSink::default());
        host.add_listener().unwrap();
        host.add_listener().unwrap();
        let mut adapter = adapter();
        assert_eq!(adapter.start(&mut host), Err(Error::ListenerTableFull));
        assert!(!adapter.is_running());
        assert!(host.surface().is_some());
    }

    #[test]
    fn test_tick_blits_then_commits() {
        let mut host = TestHost::new(CountingSink::default());
        let mut adapter = adapter();
        adapter.start(&mut host).unwrap();
        host.tick(0, &mut adapter);
        host.tick(16_000, &mut adapter);
        assert_eq!(adapter.frames(), 2);
        assert_eq!(adapter.last_status(), Some(StepStatus(4)));
        adapter.stop(&mut host);

        let sink = host.into_surface().unwrap();
        assert_eq!(sink.commits, 2);
        assert_eq!(sink.pixels.len(), 2 * SCREEN_WIDTH * SCREEN_HEIGHT);
        let second = &sink.pixels[SCREEN_WIDTH * SCREEN_HEIGHT..];
        assert_eq!(second[0], (0, 0, 2));
        assert_eq!(second[1], (1, 0, 200));
        assert_eq!(second[SCREEN_WIDTH], (0, 1, 2));
        assert_eq!(
            second.last().copied(),
            Some((SCREEN_WIDTH as u16 - 1, SCREEN_HEIGHT as u16 - 1, 2))
        );
    }

    #[test]
    fn test_host_ticks_only_started_adapter() {
        let mut host = TestHost::new(CountingSink::default());
        let mut running = adapter();
        let mut idle = adapter();
        running.start(&mut host).unwrap();
        assert!(Tickable::<TestHost>::listener(&running).is_some());
        assert_eq!(Tickable::<TestHost>::listener(&idle), None);

        host.tick(0, &mut idle);
        host.tick(10, &mut running);
        assert_eq!(idle.engine().steps, 0);
        assert_eq!(running.frames(), 1);

        running.stop(&mut host);
        host.tick(20, &mut running);
        assert_eq!(running.frames(), 1);
    }

    #[test]
    fn test_tick_while_stopped_does_nothing() {
        let mut adapter = adapter();
        Tickable::<TestHost>::on_tick(&mut adapter, Microseconds(1_000));
        assert_eq!(adapter.frames(), 0);
        assert_eq!(adapter.engine().steps, 0);
        assert_eq!(adapter.last_status(), None);
    }
}
