//! Recording doubles of the media element and of the streaming engine.

use std::{cell::RefCell, rc::Rc};

use crate::{
    adaptive::{EncodedLevel, EngineProvider, StreamingEngine, AUTO_LEVEL},
    media_element::{MediaErrorCode, PlaybackElement},
};

/// Every mutation performed on the doubles, in order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    SetSrc(String),
    SetCurrentTime(f64),
    LoadSource(String),
    AttachMedia,
    DetachMedia,
    Destroy,
    SetCurrentLevel(i32),
}

pub(crate) type OpLog = Rc<RefCell<Vec<Op>>>;

#[derive(Debug, Default)]
pub(crate) struct ElementState {
    pub(crate) current_time: f64,
    pub(crate) src: String,
    pub(crate) video_width: u32,
    pub(crate) video_height: u32,
    pub(crate) error: Option<MediaErrorCode>,
}

pub(crate) struct MockElement {
    state: Rc<RefCell<ElementState>>,
    log: OpLog,
}

impl PlaybackElement for MockElement {
    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }

    fn set_current_time(&mut self, position: f64) {
        self.log.borrow_mut().push(Op::SetCurrentTime(position));
        self.state.borrow_mut().current_time = position;
    }

    fn src(&self) -> String {
        self.state.borrow().src.clone()
    }

    fn set_src(&mut self, url: &str) {
        self.log.borrow_mut().push(Op::SetSrc(url.to_owned()));
        let mut state = self.state.borrow_mut();
        state.src = url.to_owned();
        // Loading a new source restarts from the beginning, as browsers do.
        state.current_time = 0.;
        state.error = None;
    }

    fn video_width(&self) -> u32 {
        self.state.borrow().video_width
    }

    fn video_height(&self) -> u32 {
        self.state.borrow().video_height
    }

    fn error_code(&self) -> Option<MediaErrorCode> {
        self.state.borrow().error
    }
}

#[derive(Debug)]
pub(crate) struct EngineState {
    pub(crate) levels: Vec<EncodedLevel>,
    /// Level asked through `set_current_level`.
    pub(crate) pinned_level: i32,
    /// Level actually played.
    pub(crate) playing_level: i32,
    pub(crate) attached: bool,
    pub(crate) destroyed: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            levels: vec![],
            pinned_level: AUTO_LEVEL,
            playing_level: AUTO_LEVEL,
            attached: false,
            destroyed: false,
        }
    }
}

pub(crate) struct MockEngine {
    state: Rc<RefCell<EngineState>>,
    element: Rc<RefCell<ElementState>>,
    log: OpLog,
}

impl StreamingEngine<MockElement> for MockEngine {
    fn load_source(&mut self, url: &str) {
        self.log.borrow_mut().push(Op::LoadSource(url.to_owned()));
    }

    fn attach_media(&mut self, _element: &MockElement) {
        self.log.borrow_mut().push(Op::AttachMedia);
        self.state.borrow_mut().attached = true;
        self.element.borrow_mut().current_time = 0.;
    }

    fn detach_media(&mut self) {
        self.log.borrow_mut().push(Op::DetachMedia);
        self.state.borrow_mut().attached = false;
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().push(Op::Destroy);
        let mut state = self.state.borrow_mut();
        state.attached = false;
        state.destroyed = true;
    }

    fn current_level(&self) -> i32 {
        self.state.borrow().playing_level
    }

    fn set_current_level(&mut self, level: i32) {
        self.log.borrow_mut().push(Op::SetCurrentLevel(level));
        let mut state = self.state.borrow_mut();
        state.pinned_level = level;
        if level != AUTO_LEVEL {
            state.playing_level = level;
        }
    }

    fn levels(&self) -> Vec<EncodedLevel> {
        self.state.borrow().levels.clone()
    }
}

/// Handles on the doubles' state, kept by the test once the doubles are given away.
#[derive(Clone)]
pub(crate) struct Mocks {
    pub(crate) element: Rc<RefCell<ElementState>>,
    pub(crate) engine: Rc<RefCell<EngineState>>,
    pub(crate) log: OpLog,
}

impl Mocks {
    pub(crate) fn new() -> Self {
        Self {
            element: Rc::new(RefCell::new(ElementState::default())),
            engine: Rc::new(RefCell::new(EngineState::default())),
            log: Rc::new(RefCell::new(vec![])),
        }
    }

    pub(crate) fn element(&self) -> MockElement {
        MockElement {
            state: self.element.clone(),
            log: self.log.clone(),
        }
    }

    pub(crate) fn provider(&self, supported: bool) -> MockProvider {
        MockProvider {
            supported,
            mocks: self.clone(),
        }
    }

    /// Take every operation recorded until now.
    pub(crate) fn take_ops(&self) -> Vec<Op> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    /// Returns `true` if the element is fed both by the engine and by a direct URL.
    pub(crate) fn is_doubly_fed(&self) -> bool {
        self.engine.borrow().attached && !self.element.borrow().src.is_empty()
    }
}

pub(crate) struct MockProvider {
    supported: bool,
    mocks: Mocks,
}

impl EngineProvider<MockElement> for MockProvider {
    type Engine = MockEngine;

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn create(&self) -> MockEngine {
        MockEngine {
            state: self.mocks.engine.clone(),
            element: self.mocks.element.clone(),
            log: self.mocks.log.clone(),
        }
    }
}
