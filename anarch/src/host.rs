use crate::{Error, Result};
use embedded_time::duration::Microseconds;
use log::warn;

pub trait PixelSink {
    fn set_pixel(&mut self, x: u16, y: u16, color: u8);

    fn commit(&mut self);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_pixel(&mut self, x: u16, y: u16, color: u8) {
        (**self).set_pixel(x, y, color)
    }

    fn commit(&mut self) {
        (**self).commit()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u8);

impl ListenerId {
    pub fn raw(self) -> u8 {
        self.0
    }
}

pub trait Host {
    type Surface: PixelSink;

    fn acquire_surface(&mut self) -> Option<Self::Surface>;

    /// Hands the surface back. Fails with the surface itself if the host
    /// already holds one.
    fn release_surface(
        &mut self,
        surface: Self::Surface,
    ) -> core::result::Result<(), Self::Surface>;

    fn add_listener(&mut self) -> Result<ListenerId>;

    fn remove_listener(&mut self, id: ListenerId);
}

pub trait Tickable<H: Host> {
    fn start(&mut self, host: &mut H) -> Result<()>;

    fn stop(&mut self, host: &mut H);

    fn listener(&self) -> Option<ListenerId>;

    fn on_tick(&mut self, elapsed: Microseconds<u32>);
}

pub struct LoopManager<S, const N: usize = 4> {
    surface: Option<S>,
    listeners: heapless::Vec<ListenerId, N>,
    next_id: u8,
    last_tick_us: Option<u32>,
}

impl<S: PixelSink, const N: usize> LoopManager<S, N> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Some(surface),
            listeners: heapless::Vec::new(),
            next_id: 0,
            last_tick_us: None,
        }
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn into_surface(self) -> Option<S> {
        self.surface
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.contains(&id)
    }

    pub fn tick<T: Tickable<Self>>(&mut self, now_us: u32, listener: &mut T) {
        let elapsed = match self.last_tick_us {
            Some(last) => now_us.wrapping_sub(last),
            None => 0,
        };
        self.last_tick_us = Some(now_us);
        match listener.listener() {
            Some(id) if self.is_registered(id) => listener.on_tick(Microseconds(elapsed)),
            _ => {}
        }
    }
}

impl<S: PixelSink, const N: usize> Host for LoopManager<S, N> {
    type Surface = S;

    fn acquire_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    fn release_surface(&mut self, surface: S) -> core::result::Result<(), S> {
        if self.surface.is_some() {
            warn!("surface released while another is held");
            return Err(surface);
        }
        self.surface = Some(surface);
        Ok(())
    }

    fn add_listener(&mut self) -> Result<ListenerId> {
        if self.listeners.is_full() {
            return Err(Error::ListenerTableFull);
        }
        // ids wrap, skip the ones still registered
        for _ in 0..=u8::MAX {
            let id = ListenerId(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.is_registered(id) {
                self.listeners
                    .push(id)
                    .map_err(|_| Error::ListenerTableFull)?;
                return Ok(id);
            }
        }
        Err(Error::ListenerTableFull)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|&l| l != id);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    pub(crate) struct CountingSink {
        pub(crate) pixels: Vec<(u16, u16, u8)>,
        pub(crate) commits: u32,
    }

    impl PixelSink for CountingSink {
        fn set_pixel(&mut self, x: u16, y: u16, color: u8) {
            self.pixels.push((x, y, color));
        }

        fn commit(&mut self) {
            self.commits += 1;
        }
    }

    #[derive(Default)]
    struct Recorder {
        id: Option<ListenerId>,
        ticks: Vec<u32>,
    }

    impl<H: Host> Tickable<H> for Recorder {
        fn start(&mut self, host: &mut H) -> Result<()> {
            self.id = Some(host.add_listener()?);
            Ok(())
        }

        fn stop(&mut self, host: &mut H) {
            if let Some(id) = self.id.take() {
                host.remove_listener(id);
            }
        }

        fn listener(&self) -> Option<ListenerId> {
            self.id
        }

        fn on_tick(&mut self, elapsed: Microseconds<u32>) {
            self.ticks.push(elapsed.0);
        }
    }

    type TestHost = LoopManager<CountingSink>;

    #[test]
    fn test_surface_is_lent_once() {
        let mut host = TestHost::new(CountingSink::default());
        let surface = host.acquire_surface().unwrap();
        assert!(host.acquire_surface().is_none());
        assert!(host.surface().is_none());
        assert!(host.release_surface(surface).is_ok());
        assert!(host.surface().is_some());
    }

    #[test]
    fn test_second_surface_is_handed_back() {
        let mut host = TestHost::new(CountingSink::default());
        let mut extra = CountingSink::default();
        extra.commits = 7;
        let rejected = host.release_surface(extra).err().unwrap();
        assert_eq!(rejected.commits, 7);
        assert_eq!(host.surface().unwrap().commits, 0);
    }

    #[test]
    fn test_listener_table_capacity() {
        let mut host: LoopManager<CountingSink, 2> = LoopManager::new(CountingSink::default());
        let a = host.add_listener().unwrap();
        let b = host.add_listener().unwrap();
        assert_ne!(a, b);
        assert_eq!(host.add_listener(), Err(Error::ListenerTableFull));
        host.remove_listener(a);
        assert_eq!(host.listener_count(), 1);
        host.remove_listener(a);
        assert_eq!(host.listener_count(), 1);
        assert!(host.add_listener().is_ok());
    }

    #[test]
    fn test_ids_stay_unique_after_wrap() {
        let mut host = TestHost::new(CountingSink::default());
        let kept = host.add_listener().unwrap();
        for _ in 0..1000 {
            let id = host.add_listener().unwrap();
            assert_ne!(id, kept);
            host.remove_listener(id);
        }
        assert_eq!(host.listener_count(), 1);
        assert!(host.is_registered(kept));
    }

    #[test]
    fn test_tick_elapsed_wraps() {
        let mut host = TestHost::new(CountingSink::default());
        let mut recorder = Recorder::default();
        host.tick(100, &mut recorder);
        assert!(recorder.ticks.is_empty());

        recorder.start(&mut host).unwrap();
        host.tick(u32::MAX - 9, &mut recorder);
        host.tick(20, &mut recorder);
        assert_eq!(recorder.ticks, [u32::MAX - 109, 30]);
    }

    #[test]
    fn test_only_registered_listeners_tick() {
        let mut host = TestHost::new(CountingSink::default());
        let mut registered = Recorder::default();
        let mut stranger = Recorder::default();
        registered.start(&mut host).unwrap();

        host.tick(0, &mut stranger);
        host.tick(10, &mut stranger);
        assert!(stranger.ticks.is_empty());

        host.tick(25, &mut registered);
        assert_eq!(registered.ticks, [15]);

        registered.stop(&mut host);
        host.tick(40, &mut registered);
        assert_eq!(registered.ticks, [15]);
    }
}
