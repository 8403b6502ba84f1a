use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
    Neutral,
}

impl Tone {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Tone::Error => Some("color-red"),
            Tone::Success => Some("color-green"),
            Tone::Neutral => None,
        }
    }
}

/// A message together with how long it stays up. `None` keeps it until
/// something else replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
    pub clear_after: Option<u32>,
}

impl Notice {
    pub fn new(text: impl Into<String>, tone: Tone, clear_after: Option<u32>) -> Self {
        Self {
            text: text.into(),
            tone,
            clear_after,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub tone: Tone,
}

pub enum FlashAction {
    Show { flash: Flash, generation: u64 },
    Expire(u64),
}

/// Contents of one message slot. Every shown message gets a new generation;
/// an expiry only clears the slot if it still belongs to the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashSlot {
    pub current: Option<Flash>,
    pub generation: u64,
}

impl FlashSlot {
    pub fn apply(&self, action: FlashAction) -> Self {
        match action {
            FlashAction::Show { flash, generation } => Self {
                current: Some(flash),
                generation,
            },
            FlashAction::Expire(generation) if generation == self.generation => Self {
                current: None,
                generation,
            },
            FlashAction::Expire(_) => self.clone(),
        }
    }
}

impl Reducible for FlashSlot {
    type Action = FlashAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Clone)]
pub struct FlashHandle {
    slot: UseReducerHandle<FlashSlot>,
    next_generation: Rc<RefCell<u64>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl FlashHandle {
    pub fn show(&self, notice: Notice) {
        let generation = {
            let mut next = self.next_generation.borrow_mut();
            *next += 1;
            *next
        };
        self.slot.dispatch(FlashAction::Show {
            flash: Flash {
                text: notice.text,
                tone: notice.tone,
            },
            generation,
        });

        let pending = notice.clear_after.map(|millis| {
            let slot = self.slot.clone();
            Timeout::new(millis, move || slot.dispatch(FlashAction::Expire(generation)))
        });
        // replacing the old Timeout drops and so cancels it
        *self.timer.borrow_mut() = pending;
    }

    pub fn text(&self) -> String {
        self.slot
            .current
            .as_ref()
            .map(|flash| flash.text.clone())
            .unwrap_or_default()
    }

    pub fn classes(&self) -> Classes {
        classes!(self.slot.current.as_ref().and_then(|flash| flash.tone.class()))
    }
}

#[hook]
pub fn use_flash() -> FlashHandle {
    let slot = use_reducer(FlashSlot::default);
    let next_generation = use_mut_ref(|| 0u64);
    let timer = use_mut_ref(|| None::<Timeout>);
    FlashHandle {
        slot,
        next_generation,
        timer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(slot: &FlashSlot, text: &str, generation: u64) -> FlashSlot {
        slot.apply(FlashAction::Show {
            flash: Flash {
                text: text.to_string(),
                tone: Tone::Neutral,
            },
            generation,
        })
    }

    #[test]
    fn test_tone_classes() {
        assert_eq!(Tone::Error.class(), Some("color-red"));
        assert_eq!(Tone::Success.class(), Some("color-green"));
        assert_eq!(Tone::Neutral.class(), None);
    }

    #[test]
    fn test_expiry_clears_current_message() {
        let slot = show(&FlashSlot::default(), "A", 1);
        let slot = slot.apply(FlashAction::Expire(1));
        assert_eq!(slot.current, None);
    }

    #[test]
    fn test_stale_expiry_leaves_newer_message() {
        let slot = show(&FlashSlot::default(), "A", 1);
        let slot = show(&slot, "B", 2);
        let slot = slot.apply(FlashAction::Expire(1));
        assert_eq!(slot.current.map(|flash| flash.text), Some("B".to_string()));
    }
}
