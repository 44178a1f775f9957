//! Bundle viewer demo
//!
//! Drives the overlay UI toolkit the way the streamline-bundle workflow
//! does: a recognized bundle in the 3D scene, plus a control panel with a
//! name text box, a save button, an expand/reduce slider, and an opacity
//! ring. All callback state flows through an explicit [`BundleSession`];
//! the interaction itself is a recorded script replayed through the router.

mod session;

use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_engine::config::ConfigError;
use viz_engine::interaction::ScriptError;
use viz_engine::prelude::*;

use crate::session::{mock_streamlines, BundleSession};

/// Top-level application errors
#[derive(thiserror::Error, Debug)]
enum AppError {
    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// UI construction failed
    #[error("ui construction error: {0}")]
    Ui(#[from] UiError),

    /// The interaction script failed to parse
    #[error("script error: {0}")]
    Script(#[from] ScriptError),
}

/// Widget ids and clickable actors the callbacks need, bundled for wiring
struct Controls {
    panel: WidgetId,
    textbox: WidgetId,
    textbox_actor: ActorId,
    button_actor: ActorId,
    expand_slider: WidgetId,
    slider_handle: ActorId,
    ring_handle: ActorId,
}

fn main() -> Result<(), AppError> {
    viz_engine::foundation::logging::init();

    let config = match UiConfig::load_from_file("bundle_viewer.toml") {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => {
            log::info!("No bundle_viewer.toml found, using defaults");
            UiConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    let mut scene = Scene::new(config.window.width, config.window.height);
    scene.set_background(Vec3::from(config.background));

    // The recognized bundle, standing in for real tractography data
    let mut rng = StdRng::seed_from_u64(42);
    let streamlines = mock_streamlines(&mut rng, 50);
    let bundle_prop = scene.add_prop(Prop3D::new(Point3::new(0.0, 0.0, 0.0), 40.0));
    let mut session = BundleSession::new(streamlines, 20, bundle_prop);

    let mut ui = UiRegistry::new();
    let mut router: EventRouter<BundleSession> =
        EventRouter::new(Box::new(ScenePicker::new()), CameraController::new());

    let controls = build_controls(&mut scene, &mut ui, &config)?;
    wire_callbacks(&mut router, &controls);

    // Round-trip the script through its wire form, as a recorded session
    // loaded from disk would arrive
    let script = EventScript::from_ron_str(&interaction_script().to_ron_string()?)?;
    let outcomes = script.replay(&mut router, &mut ui, &mut scene, &mut session);

    report(&scene, &ui, &session, &controls, &outcomes);
    Ok(())
}

/// Build the control panel and register every widget
fn build_controls(
    scene: &mut Scene,
    ui: &mut UiRegistry,
    config: &UiConfig,
) -> Result<Controls, AppError> {
    let palette = &config.palette;

    let panel = Panel::new(
        scene,
        Point2::new(950.0, 650.0),
        Vec2::new(400.0, 400.0),
        Vec3::from(palette.panel_color),
        palette.panel_opacity,
    );
    let panel = ui.register(WidgetNode::Panel(panel));

    let textbox = TextBox::new(
        scene,
        10,
        2,
        "Enter Text",
        Point2::new(0.0, 0.0),
        18.0,
        Vec3::from(palette.text_color),
    )?;
    let textbox_actor = textbox.actor();
    let textbox = ui.register(WidgetNode::TextBox(textbox));

    let mut icons = IconStore::new();
    // Prefer icons from the configured directory, falling back to builtin
    // placeholders when none are installed
    let drive = match icons.load("drive", format!("{}/drive.png", config.icon_dir)) {
        Ok(handle) => handle,
        Err(e) => {
            log::debug!("Using builtin save icon: {e}");
            icons.insert("drive", IconImage::solid_color(24, 24, [90, 160, 255, 255]))
        }
    };
    let drive_done = icons.insert("drive-done", IconImage::solid_color(24, 24, [90, 255, 160, 255]));
    let button = Button::new(
        scene,
        &icons,
        vec![
            ("drive".to_string(), drive),
            ("drive-done".to_string(), drive_done),
        ],
    )?;
    let button_actor = button.actor();
    let button = ui.register(WidgetNode::Button(button));

    let expand_slider = LineSlider::new(
        scene,
        &LineSliderSpec {
            track_color: Vec3::from(palette.slider_color),
            handle_color: Vec3::from(palette.handle_color),
            text_color: Vec3::from(palette.text_color),
            ..LineSliderSpec::default()
        },
    )?;
    let slider_handle = expand_slider.handle_actor();
    let expand_slider = ui.register(WidgetNode::LineSlider(expand_slider));

    let opacity_ring = RadialSlider::new(
        scene,
        &RadialSliderSpec {
            ring_color: Vec3::from(palette.slider_color),
            handle_color: Vec3::from(palette.handle_color),
            text_color: Vec3::from(palette.text_color),
            ..RadialSliderSpec::default()
        },
    )?;
    let ring_handle = opacity_ring.handle_actor();
    let opacity_ring = ui.register(WidgetNode::RadialSlider(opacity_ring));

    ui.add_to_panel(panel, textbox, Vec2::new(0.1, 0.8), scene);
    ui.add_to_panel(panel, button, Vec2::new(0.8, 0.85), scene);
    ui.add_to_panel(panel, expand_slider, Vec2::new(0.5, 0.5), scene);
    ui.add_to_panel(panel, opacity_ring, Vec2::new(0.5, 0.2), scene);
    ui.add_to_scene(panel, scene);

    Ok(Controls {
        panel,
        textbox,
        textbox_actor,
        button_actor,
        expand_slider,
        slider_handle,
        ring_handle,
    })
}

/// Attach router callbacks for every control
fn wire_callbacks(router: &mut EventRouter<BundleSession>, controls: &Controls) {
    // Text box: click to edit, keys to type; "return" commits the name
    let textbox_actor = controls.textbox_actor;
    router.add_callback(
        PickTarget::Overlay(textbox_actor),
        EventKind::LeftButtonPress,
        Box::new(|ctx| {
            if let Some(textbox) = ctx.widget.as_mut().and_then(|w| w.as_textbox_mut()) {
                textbox.edit_mode(ctx.scene);
                ctx.scene.request_render();
            }
            true
        }),
    );
    router.add_callback(
        PickTarget::Overlay(textbox_actor),
        EventKind::Char,
        Box::new(|ctx| {
            let key = ctx.event.key_str().to_string();
            if let Some(textbox) = ctx.widget.as_mut().and_then(|w| w.as_textbox_mut()) {
                if textbox.handle_character(ctx.scene, &key) {
                    ctx.session.pending_name = textbox.text();
                    log::info!("Bundle name committed: {:?}", ctx.session.pending_name);
                }
                ctx.scene.request_render();
            }
            true
        }),
    );

    // Expand/reduce slider: drag the handle, resize the displayed bundle
    let slider_handle = controls.slider_handle;
    fn expand_drag(ctx: &mut HandlerCtx<'_, BundleSession>) -> bool {
        let x = ctx.event.position.0 as f32;
        if let Some(slider) = ctx.widget.as_mut().and_then(|w| w.as_line_slider_mut()) {
            slider.set_handle_position(ctx.scene, x);
            let shown = ctx.session.resize_to_percentage(slider.percentage());
            // The resized bundle gets a rebuilt display prop, like the
            // workflow swapping its line actor after expand/reduce
            if let Some(old) = ctx.scene.remove_prop(ctx.session.bundle_prop) {
                let radius = 20.0 + shown as f32 * 0.5;
                ctx.session.bundle_prop = ctx.scene.add_prop(Prop3D::new(old.position, radius));
            }
            ctx.scene.request_render();
        }
        true
    }
    router.add_callback(
        PickTarget::Overlay(slider_handle),
        EventKind::LeftButtonPress,
        Box::new(expand_drag),
    );
    router.add_callback(
        PickTarget::Overlay(slider_handle),
        EventKind::MouseMove,
        Box::new(expand_drag),
    );

    // Opacity ring: snap the handle to the ring, apply the percentage
    let ring_handle = controls.ring_handle;
    fn opacity_drag(ctx: &mut HandlerCtx<'_, BundleSession>) -> bool {
        let pointer = Point2::new(ctx.event.position.0 as f32, ctx.event.position.1 as f32);
        if let Some(ring) = ctx.widget.as_mut().and_then(|w| w.as_radial_slider_mut()) {
            ring.snap_handle(ctx.scene, pointer);
            ctx.session.bundle_opacity = ring.percentage() / 100.0;
            ctx.scene.request_render();
        }
        true
    }
    router.add_callback(
        PickTarget::Overlay(ring_handle),
        EventKind::LeftButtonPress,
        Box::new(opacity_drag),
    );
    router.add_callback(
        PickTarget::Overlay(ring_handle),
        EventKind::MouseMove,
        Box::new(opacity_drag),
    );

    // Save button: flip the icon, save under the pending name
    let button_actor = controls.button_actor;
    let textbox_id = controls.textbox;
    router.add_callback(
        PickTarget::Overlay(button_actor),
        EventKind::LeftButtonPress,
        Box::new(move |ctx| {
            if let Some(name) = ctx
                .ui
                .get_mut(textbox_id)
                .and_then(WidgetNode::as_textbox_mut)
                .map(|t| t.text())
            {
                if name != "Enter Text" {
                    ctx.session.pending_name = name;
                }
            }
            if let Some(button) = ctx.widget.as_mut().and_then(|w| w.as_button_mut()) {
                button.next_icon(ctx.scene);
            }
            let file = ctx.session.save().to_string();
            log::info!("Saved bundle as {file}");
            ctx.scene.request_render();
            true
        }),
    );
}

/// The recorded interaction this demo replays
fn interaction_script() -> EventScript {
    let mut script = EventScript::new();

    // Name the bundle: click the text box, type, commit
    script.push(InputEvent::pointer(EventKind::LeftButtonPress, 800.0, 775.0));
    script.push(InputEvent::pointer(EventKind::LeftButtonRelease, 800.0, 775.0));
    for key in ["a", "f", "_", "l", "e", "f", "t"] {
        script.push(InputEvent::character(key));
    }
    script.push(InputEvent::character("return"));

    // Expand the bundle: drag the line slider handle from 50% to 70%
    script.push(InputEvent::pointer(EventKind::LeftButtonPress, 950.0, 650.0));
    script.push(InputEvent::pointer(EventKind::MouseMove, 970.0, 650.0));
    script.push(InputEvent::pointer(EventKind::MouseMove, 990.0, 650.0));
    script.push(InputEvent::pointer(EventKind::LeftButtonRelease, 990.0, 650.0));

    // Dim the bundle: drag the ring handle a quarter turn
    script.push(InputEvent::pointer(EventKind::LeftButtonPress, 992.0, 530.0));
    script.push(InputEvent::pointer(EventKind::MouseMove, 950.0, 600.0));
    script.push(InputEvent::pointer(EventKind::LeftButtonRelease, 950.0, 600.0));

    // Save it
    script.push(InputEvent::pointer(EventKind::LeftButtonPress, 1080.0, 800.0));
    script.push(InputEvent::pointer(EventKind::LeftButtonRelease, 1080.0, 800.0));

    // Look around: rotate on an empty-space left-drag, dolly with the wheel
    script.push(InputEvent::pointer(EventKind::LeftButtonPress, 300.0, 300.0));
    script.push(InputEvent::pointer(EventKind::MouseMove, 360.0, 320.0));
    script.push(InputEvent::pointer(EventKind::LeftButtonRelease, 360.0, 320.0));
    script.push(InputEvent::pointer(EventKind::MouseWheelForward, 300.0, 300.0));

    script
}

/// Backend that only counts draw calls, standing in for a real rasterizer
#[derive(Default)]
struct DrawStats {
    quads: usize,
    disks: usize,
    texts: usize,
    textured: usize,
}

impl RenderBackend for DrawStats {
    fn begin_frame(&mut self, _background: Vec3) -> Result<(), viz_engine::scene::BackendError> {
        Ok(())
    }

    fn draw_quad(
        &mut self,
        _position: Point2,
        _width: f32,
        _height: f32,
        _color: Vec3,
        _opacity: f32,
    ) -> Result<(), viz_engine::scene::BackendError> {
        self.quads += 1;
        Ok(())
    }

    fn draw_disk(
        &mut self,
        _center: Point2,
        _inner_radius: f32,
        _outer_radius: f32,
        _color: Vec3,
        _opacity: f32,
    ) -> Result<(), viz_engine::scene::BackendError> {
        self.disks += 1;
        Ok(())
    }

    fn draw_text(
        &mut self,
        _position: Point2,
        _content: &str,
        _font_size: f32,
        _color: Vec3,
        _opacity: f32,
    ) -> Result<(), viz_engine::scene::BackendError> {
        self.texts += 1;
        Ok(())
    }

    fn draw_textured_quad(
        &mut self,
        _position: Point2,
        _icon: IconHandle,
        _width: f32,
        _height: f32,
        _opacity: f32,
    ) -> Result<(), viz_engine::scene::BackendError> {
        self.textured += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), viz_engine::scene::BackendError> {
        Ok(())
    }
}

/// Print where the session ended up
fn report(
    scene: &Scene,
    ui: &UiRegistry,
    session: &BundleSession,
    controls: &Controls,
    outcomes: &[Dispatch],
) {
    let widget_hits = outcomes
        .iter()
        .filter(|o| matches!(o, Dispatch::Widget(_)))
        .count();
    let camera_hits = outcomes.iter().filter(|o| **o == Dispatch::Camera).count();

    let slider_pct = match ui.get(controls.expand_slider) {
        Some(WidgetNode::LineSlider(s)) => s.percentage(),
        _ => 0.0,
    };
    let panel_children = ui
        .get(controls.panel)
        .and_then(WidgetNode::as_panel)
        .map_or(0, |p| p.children().len());

    println!("bundle viewer session summary");
    println!("  panel children:     {panel_children}");
    println!(
        "  bundle display:     {} of {} streamlines ({:.0}% on the slider)",
        session.shown(),
        session.pool_len(),
        slider_pct
    );
    println!("  bundle opacity:     {:.2}", session.bundle_opacity);
    println!(
        "  saved as:           {}",
        session.saved_as.as_deref().unwrap_or("<not saved>")
    );
    println!(
        "  events dispatched:  {} ({} to widgets, {} to the camera)",
        outcomes.len(),
        widget_hits,
        camera_hits
    );
    println!(
        "  camera distance:    {:.2}",
        (scene.camera().position - scene.camera().target).norm()
    );

    let mut stats = DrawStats::default();
    if scene.render_with(&mut stats).is_ok() {
        println!(
            "  overlay draw calls: {} quads, {} disks, {} texts, {} icons",
            stats.quads, stats.disks, stats.texts, stats.textured
        );
    }
}
