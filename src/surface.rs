use crate::animation::timer::CancellationToken;
use crate::foundation::core::Canvas;
use crate::interaction::pointer::{PointerEvent, RawPointer};
use crate::view::ViewTree;

/// Host container a chart mounts into.
///
/// The surface holds whatever view tree is mounted and whether pointer input is routed to it.
/// It hit-tests raw pointer positions against the tree's overlay and turns them into
/// enter/leave/move events.
///
/// Each attach starts a new mount generation and cancels the animation of the previous mount, so
/// only the most recently mounted chart may touch the view.
#[derive(Debug)]
pub struct Surface {
    canvas: Canvas,
    view: Option<ViewTree>,
    listening: bool,
    hovering: bool,
    generation: u64,
    animation: Option<CancellationToken>,
}

impl Surface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            view: None,
            listening: false,
            hovering: false,
            generation: 0,
            animation: None,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn view(&self) -> Option<&ViewTree> {
        self.view.as_ref()
    }

    pub(crate) fn view_mut(&mut self) -> Option<&mut ViewTree> {
        self.view.as_mut()
    }

    pub fn is_mounted(&self) -> bool {
        self.view.is_some()
    }

    /// Whether pointer input is currently routed to a mounted view.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Mount generation of the current (or last) attach.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `generation` still owns the mounted view.
    pub fn is_current(&self, generation: u64) -> bool {
        self.view.is_some() && self.generation == generation
    }

    /// Replace whatever is mounted. The previous mount's animation is cancelled.
    ///
    /// Returns the generation the new mount must present on every later access.
    pub(crate) fn attach(&mut self, view: ViewTree, animation: Option<CancellationToken>) -> u64 {
        if let Some(previous) = self.animation.take() {
            previous.cancel();
        }
        self.generation += 1;
        self.view = Some(view);
        self.animation = animation;
        self.listening = true;
        self.hovering = false;
        self.generation
    }

    /// Drop the mounted view, cancel its animation and stop routing input.
    pub(crate) fn clear(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.cancel();
        }
        self.view = None;
        self.listening = false;
        self.hovering = false;
    }

    /// Translate raw input into overlay events, in plot coordinates.
    pub fn route(&mut self, raw: RawPointer) -> Vec<PointerEvent> {
        let Some(view) = self.view.as_ref().filter(|_| self.listening) else {
            return Vec::new();
        };

        match raw {
            RawPointer::Mouse(p) => {
                let p = view.to_plot(p);
                let hit = view.overlay.contains(p);
                match (hit, self.hovering) {
                    (true, false) => {
                        self.hovering = true;
                        vec![PointerEvent::Enter(p), PointerEvent::Move(p)]
                    }
                    (true, true) => vec![PointerEvent::Move(p)],
                    (false, true) => {
                        self.hovering = false;
                        vec![PointerEvent::Leave]
                    }
                    (false, false) => Vec::new(),
                }
            }
            RawPointer::Touch(p) => {
                let p = view.to_plot(p);
                if view.overlay.contains(p) {
                    vec![PointerEvent::TouchMove(p)]
                } else {
                    Vec::new()
                }
            }
            RawPointer::Exit => {
                if self.hovering {
                    self.hovering = false;
                    vec![PointerEvent::Leave]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
