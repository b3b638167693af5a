//! The per-frame camera driver.
//!
//! [`CameraRig`] owns the three camera controllers, the input pipeline and
//! the transition state. Each frame it reads every device source, fuses the
//! deltas, feeds the active camera and blends the result with the pose the
//! viewer was showing when the mode last changed.

/// Scene extents and derived placements.
pub mod bounds;
/// Discrete rig operations.
pub mod command;
/// Double-tap focus picking.
pub mod picking;

pub use bounds::SceneBounds;
pub use command::RigCommand;
use glam::{Vec2, Vec3};
pub use picking::PickRequest;
use picking::PickSlot;

use crate::camera::{
    AnimCamera, CameraController, CameraMode, FlyCamera, OrbitCamera, Pose,
};
use crate::input::sources::JoystickUi;
use crate::input::{
    FusionContext, FusionController, FusionSpeeds, InputEvent, InputFrame,
    InputMode, InputProcessor, PointerRoute,
};
use crate::options::Options;
use crate::settings::{Settings, StartAnim};
use crate::state::{StateEvent, ViewerState};

/// Fly speed per unit of scene size.
const FLY_SPEED_PER_SIZE: f32 = 0.0001;

/// Multi-mode camera rig.
///
/// # Usage
///
/// ```ignore
/// let mut rig = CameraRig::new(&settings, options, bounds);
/// rig.set_viewport(width, height);
///
/// // Event loop:
/// rig.handle_event(event);
///
/// // Every frame:
/// let pose = rig.update(dt);
/// renderer.set_camera(pose.position, pose.rotation);
/// for change in rig.drain_events() { ui.apply(change); }
/// ```
pub struct CameraRig {
    options: Options,
    state: ViewerState,
    processor: InputProcessor,
    fusion: FusionController,
    frame: InputFrame,

    orbit: OrbitCamera,
    fly: FlyCamera,
    anim: Option<AnimCamera>,

    /// Last rendered pose.
    pose: Pose,
    /// Pose shown when the mode last changed; the blend starts here.
    previous: Pose,
    previous_mode: CameraMode,
    transition_timer: f32,

    frame_pose: Pose,
    reset_pose: Pose,
    fov: f32,
    viewport: Vec2,
    picks: PickSlot,
}

impl CameraRig {
    /// Build the rig for a loaded scene.
    ///
    /// The user camera starts at the authored reset placement when the
    /// settings name one (or the scene is too big to frame), otherwise at a
    /// pose framing the bounds. A start pose outside the bounds marks an
    /// object scene, which gets a turntable when no track is configured.
    #[must_use]
    pub fn new(settings: &Settings, options: Options, bounds: SceneBounds) -> Self {
        let fov = settings.camera.fov;
        let frame_pose = bounds.frame_pose(fov);
        let reset_pose = bounds::reset_pose(&settings.camera);

        let use_reset = settings.camera.position.is_some()
            || settings.camera.target.is_some()
            || bounds.size() > bounds::HUGE_SCENE;
        let start = if use_reset { reset_pose } else { frame_pose };
        let object = !bounds.contains(start.position);

        let mut anim = build_anim(settings, &start, object);
        if let Some(anim) = anim.as_mut() {
            anim.rotate_speed = options.camera.look_speed;
        }

        let mut orbit = OrbitCamera::new();
        orbit.set_damping(options.camera.damping);
        orbit.pan_speed = options.camera.pan_speed;
        orbit.rotate_speed = options.camera.rotate_speed;
        orbit.distance_speed = options.camera.zoom_speed;

        let mut fly = FlyCamera::new();
        fly.damping = options.camera.damping;
        fly.rotate_speed = options.camera.rotate_speed;
        fly.move_speed = (bounds.size() * FLY_SPEED_PER_SIZE).clamp(0.05, 1.0)
            * options.input.move_speed;

        let mode = if anim.is_some() {
            CameraMode::Anim
        } else {
            CameraMode::Orbit
        };
        let pose = anim.as_ref().map_or(start, CameraController::pose);
        orbit.reset(&pose, true);
        fly.reset(&pose, true);

        let state = ViewerState::new(
            mode,
            anim.as_ref().map(|anim| anim.cursor().duration()),
        );
        let processor =
            InputProcessor::new(&options.input, options.keybindings.clone());
        let fusion = FusionController::new(FusionSpeeds {
            move_speed: 1.0,
            orbit_speed: options.input.orbit_speed,
            pinch_speed: options.input.pinch_speed,
            wheel_speed: options.input.wheel_speed,
        });

        log::debug!(
            "camera rig: start {mode:?}, scene size {}, object scene {object}",
            bounds.size()
        );

        let mut rig = Self {
            options,
            state,
            processor,
            fusion,
            frame: InputFrame::default(),
            orbit,
            fly,
            anim,
            pose,
            previous: pose,
            previous_mode: CameraMode::Orbit,
            transition_timer: 1.0,
            frame_pose,
            reset_pose,
            fov,
            viewport: Vec2::ZERO,
            picks: PickSlot::default(),
        };
        rig.assign_route();
        rig
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// The pose rendered by the last [`update`](Self::update).
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Active camera mode.
    #[must_use]
    pub fn camera_mode(&self) -> CameraMode {
        self.state.camera_mode()
    }

    /// Shared viewer state.
    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Take every state change published since the last call.
    pub fn drain_events(&mut self) -> Vec<StateEvent> {
        self.state.drain_events()
    }

    /// Options the rig was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Orbit controller.
    #[must_use]
    pub fn orbit(&self) -> &OrbitCamera {
        &self.orbit
    }

    /// Fly controller.
    #[must_use]
    pub fn fly(&self) -> &FlyCamera {
        &self.fly
    }

    /// Scripted controller, if the scene has a track.
    #[must_use]
    pub fn anim(&self) -> Option<&AnimCamera> {
        self.anim.as_ref()
    }

    /// Scene-fitting pose used by [`RigCommand::Frame`].
    #[must_use]
    pub fn frame_pose(&self) -> Pose {
        self.frame_pose
    }

    /// Authored pose used by [`RigCommand::Reset`].
    #[must_use]
    pub fn reset_pose(&self) -> Pose {
        self.reset_pose
    }

    /// Mode-transition progress in `[0, 1]`.
    #[must_use]
    pub fn transition_progress(&self) -> f32 {
        self.transition_timer
    }

    /// Touch joystick geometry for the host to draw, while one is deflected.
    #[must_use]
    pub fn joystick(&self) -> Option<JoystickUi> {
        self.processor.joystick()
    }

    /// Viewport size in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.processor.set_viewport(width);
    }

    // ── Input ──────────────────────────────────────────────────────────

    /// Feed one platform event.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let InputEvent::PointerDown { kind, .. }
        | InputEvent::PointerMove { kind, .. } = event
        {
            if self.state.set_input_mode(InputMode::from(kind)) {
                self.assign_route();
            }
        }
        let route = self.processor.route();
        if let Some(command) = self.processor.handle_event(event) {
            self.execute(command);
        }

        // A press that left playback keeps going as a gesture in the new mode
        if let InputEvent::PointerDown {
            id, button, x, y, ..
        } = event
        {
            if self.processor.route() != route {
                self.processor
                    .route_pointer_down(id, button, Vec2::new(x, y));
            }
        }
    }

    fn assign_route(&mut self) {
        let route = PointerRoute::select(
            self.state.camera_mode(),
            self.state.input_mode(),
            self.options.camera.free_look,
        );
        self.processor.set_route(route);
    }

    // ── Commands ───────────────────────────────────────────────────────

    /// Run a discrete operation.
    pub fn execute(&mut self, command: RigCommand) {
        match command {
            RigCommand::Frame => self.reset_to(self.frame_pose),
            RigCommand::Reset => self.reset_to(self.reset_pose),
            RigCommand::Cancel | RigCommand::Interrupt => self.leave_anim(),
            RigCommand::PlayPause => {
                let _ = self.set_camera_mode(CameraMode::Anim);
                if self.camera_mode() == CameraMode::Anim {
                    let paused = !self.state.animation_paused();
                    self.state.set_animation_paused(paused);
                }
            }
            RigCommand::SetPaused(paused) => {
                let _ = self.set_camera_mode(CameraMode::Anim);
                if self.camera_mode() == CameraMode::Anim {
                    self.state.set_animation_paused(paused);
                }
            }
            RigCommand::SetAnimationTime(time) => {
                if let Some(anim) = self.anim.as_mut() {
                    anim.cursor_mut().set_value(time);
                    let _ = self.set_camera_mode(CameraMode::Anim);
                }
            }
            RigCommand::SetCameraMode(mode) => {
                let _ = self.set_camera_mode(mode);
            }
            RigCommand::Pick { x, y } => {
                if self.camera_mode() != CameraMode::Orbit {
                    return;
                }
                if self.picks.is_pending() {
                    log::debug!("pick ignored, one already pending");
                    return;
                }
                if let Some(request) = self.picks.issue(x, y) {
                    log::debug!("pick #{} at ({x}, {y})", request.id);
                }
            }
        }
    }

    /// Switch camera mode. Returns whether the mode changed.
    ///
    /// The new user camera snaps to the pose currently on screen and the
    /// rendered pose eases over from there. Switching to the scripted
    /// camera without a track does nothing.
    pub fn set_camera_mode(&mut self, mode: CameraMode) -> bool {
        if mode == CameraMode::Anim && self.anim.is_none() {
            log::debug!("no animation track, staying in {:?}", self.camera_mode());
            return false;
        }
        let Some(previous) = self.state.set_camera_mode(mode) else {
            return false;
        };

        self.previous_mode = previous;
        self.previous = self.pose;
        match mode {
            CameraMode::Orbit => self.orbit.reset(&self.pose, true),
            CameraMode::Fly => self.fly.reset(&self.pose, true),
            CameraMode::Anim => {
                if let Some(anim) = self.anim.as_mut() {
                    anim.reset(&self.pose, true);
                }
            }
        }
        self.transition_timer = 0.0;
        self.assign_route();
        if let Some(request) = self.picks.cancel() {
            log::debug!("pick #{} abandoned by mode switch", request.id);
        }

        log::debug!("camera mode {previous:?} -> {mode:?}");
        true
    }

    fn leave_anim(&mut self) {
        if self.camera_mode() == CameraMode::Anim {
            let _ = self.set_camera_mode(self.previous_mode);
        }
    }

    /// Glide the user camera to `pose`, leaving scripted playback first.
    fn reset_to(&mut self, pose: Pose) {
        self.leave_anim();
        match self.camera_mode() {
            CameraMode::Orbit => self.orbit.reset(&pose, false),
            CameraMode::Fly => self.fly.reset(&pose, false),
            CameraMode::Anim => {}
        }
    }

    // ── Picking ────────────────────────────────────────────────────────

    /// The pick the host should hit-test, handed out once.
    pub fn take_pick_request(&mut self) -> Option<PickRequest> {
        self.picks.take_request()
    }

    /// Give up on the outstanding pick, if any, so a new one can start.
    /// Returns whether one was pending.
    pub fn cancel_pick(&mut self) -> bool {
        self.picks.cancel().is_some()
    }

    /// Answer a pick. A hit re-aims the orbit camera at the point from
    /// where it is now. Answers for another request, answers arriving
    /// after the rig left orbit mode, and misses are dropped. Returns
    /// whether the camera moved.
    pub fn resolve_pick(&mut self, request: PickRequest, hit: Option<Vec3>) -> bool {
        if !self.picks.complete(request.id) {
            log::debug!("dropping answer for unknown pick #{}", request.id);
            return false;
        }
        if self.camera_mode() != CameraMode::Orbit {
            log::debug!("dropping stale pick #{}", request.id);
            return false;
        }
        let Some(point) = hit.filter(|p| p.is_finite()) else {
            log::debug!("pick #{} missed", request.id);
            return false;
        };

        let from = self.orbit.pose().position;
        self.orbit.reset(&Pose::from_look_at(from, point), false);
        log::debug!("pick #{} focused {point}", request.id);
        true
    }

    // ── Frame update ───────────────────────────────────────────────────

    /// Advance one frame and return the pose to render.
    pub fn update(&mut self, dt: f32) -> Pose {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let deltas = self.processor.read();
        let context = FusionContext {
            mode: self.camera_mode(),
            dt,
            fov: self.fov,
            horizontal_fov: self.options.camera.horizontal_fov,
            viewport: self.viewport,
            free_look: self.options.camera.free_look,
        };
        if let Some(mode) = self.fusion.update(&deltas, &context, &mut self.frame) {
            let _ = self.set_camera_mode(mode);
        }

        let mut pose = self.camera_pose(dt);
        self.frame.clear();

        if self.transition_timer < 1.0 {
            let duration = self.options.camera.transition_duration;
            self.transition_timer = if duration > 0.0 {
                (self.transition_timer + dt / duration).min(1.0)
            } else {
                1.0
            };
            if self.transition_timer < 1.0 {
                let weight = self
                    .options
                    .camera
                    .transition_easing
                    .evaluate(self.transition_timer);
                pose = Pose::lerp(&self.previous, &pose, weight);
                log::trace!(
                    "transition {:.3} (weight {weight:.3})",
                    self.transition_timer
                );
            }
        }

        self.pose = pose;
        pose
    }

    /// Feed the active camera and read its pose.
    fn camera_pose(&mut self, dt: f32) -> Pose {
        let input = Some(&self.frame);
        match self.state.camera_mode() {
            CameraMode::Orbit => {
                self.orbit.update(dt, input);
                self.orbit.pose()
            }
            CameraMode::Fly => {
                self.fly.update(dt, input);
                self.fly.pose()
            }
            CameraMode::Anim => {
                let Some(anim) = self.anim.as_mut() else {
                    return self.pose;
                };
                // Playback ramps up with the transition
                let anim_dt = if self.state.animation_paused() {
                    0.0
                } else {
                    dt * self.transition_timer
                };
                let look = self.options.camera.free_look.then_some(&self.frame);
                anim.update(anim_dt, look);
                self.state.set_animation_time(anim.cursor().value());
                anim.pose()
            }
        }
    }
}

/// Pick the scripted camera for a scene: the configured start track if it
/// loads, otherwise a turntable for object scenes.
fn build_anim(settings: &Settings, start: &Pose, object: bool) -> Option<AnimCamera> {
    if let Some(track) = settings.start_track() {
        match AnimCamera::from_track(track) {
            Ok(anim) => return Some(anim),
            Err(e) => log::warn!("ignoring animation track: {e}"),
        }
    } else if settings.camera.start_anim == StartAnim::AnimTrack {
        log::warn!(
            "animation track '{}' not found",
            settings.camera.anim_track.as_deref().unwrap_or_default()
        );
    }

    if !object {
        return None;
    }
    match AnimCamera::from_track(&bounds::turntable_track(start)) {
        Ok(anim) => Some(anim),
        Err(e) => {
            log::warn!("turntable unavailable: {e}");
            None
        }
    }
}
