//! Auto-dismissal of flash banners.
//!
//! Time is a logical millisecond clock owned by the schedule. The browser driver
//! sleeps until [`BannerSchedule::next_deadline`] and then calls
//! [`BannerSchedule::advance_to`]; tests call it directly.

use contracts::shared::flash::FlashMessage;

pub type BannerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    /// Fully visible, carries the `show` class.
    Shown,
    /// `show` removed, CSS transition running.
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub message: FlashMessage,
    pub phase: BannerPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerEvent {
    FadeStarted(BannerId),
    Removed(BannerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskKind {
    Fade,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledTask {
    due_ms: u64,
    banner: BannerId,
    kind: TaskKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSchedule {
    display_ms: u64,
    fade_ms: u64,
    now_ms: u64,
    next_id: BannerId,
    banners: Vec<Banner>,
    tasks: Vec<ScheduledTask>,
}

impl BannerSchedule {
    pub fn new(display_ms: u64, fade_ms: u64) -> Self {
        Self {
            display_ms,
            fade_ms,
            now_ms: 0,
            next_id: 1,
            banners: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn phase(&self, id: BannerId) -> Option<BannerPhase> {
        self.banners.iter().find(|b| b.id == id).map(|b| b.phase)
    }

    /// Show a banner now and schedule its fade.
    pub fn push(&mut self, message: FlashMessage) -> BannerId {
        let id = self.next_id;
        self.next_id += 1;

        self.banners.push(Banner {
            id,
            message,
            phase: BannerPhase::Shown,
        });
        self.tasks.push(ScheduledTask {
            due_ms: self.now_ms + self.display_ms,
            banner: id,
            kind: TaskKind::Fade,
        });

        id
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.due_ms).min()
    }

    /// Run every task due at or before `now_ms`, earliest first.
    ///
    /// A fade scheduled inside the window also gets its removal run if that
    /// falls inside the window too. The clock never moves backwards.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<BannerEvent> {
        self.now_ms = self.now_ms.max(now_ms);
        let mut events = Vec::new();

        while let Some(index) = self.next_due_index() {
            let task = self.tasks.remove(index);
            match task.kind {
                TaskKind::Fade => {
                    if let Some(banner) = self.banners.iter_mut().find(|b| b.id == task.banner) {
                        banner.phase = BannerPhase::Fading;
                    }
                    self.tasks.push(ScheduledTask {
                        due_ms: task.due_ms + self.fade_ms,
                        banner: task.banner,
                        kind: TaskKind::Remove,
                    });
                    events.push(BannerEvent::FadeStarted(task.banner));
                }
                TaskKind::Remove => {
                    self.banners.retain(|b| b.id != task.banner);
                    events.push(BannerEvent::Removed(task.banner));
                }
            }
        }

        events
    }

    /// Drop the banner and everything pending for it. Returns `false` for
    /// an id that is already gone.
    pub fn cancel(&mut self, id: BannerId) -> bool {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != id);
        self.tasks.retain(|t| t.banner != id);
        self.banners.len() != before
    }

    fn next_due_index(&self) -> Option<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= self.now_ms)
            .min_by_key(|(_, t)| t.due_ms)
            .map(|(i, _)| i)
    }
}
