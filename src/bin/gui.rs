use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use gridlock::*;

// ---------- Constants ----------
const TILE_SIZE: f32 = 40.0;
const RNG_SEED: u64 = 42;
const TICK_SECONDS: f32 = 1.0;

// ---------- Components ----------
#[derive(Component)]
struct GridTile;

#[derive(Component)]
struct VehicleSprite {
	id: u32,
}

#[derive(Component)]
struct VehicleLayer; // Marker to despawn/rebuild when the board changes

// ---------- Resources ----------
#[derive(Resource)]
struct UiState {
	event_log: Vec<String>,
	toast: Option<(String, f32)>, // (message, remaining_seconds)
	tick_accum: f32,
	request_rebuild_vehicles: bool,
}

#[derive(Resource)]
struct GameSession {
	session: Session,
}

// ---------- Entry ----------
fn main() {
	App::new()
		.add_plugins(DefaultPlugins.set(WindowPlugin {
			primary_window: Some(Window {
				title: "Traffic Tamer".to_string(),
				resolution: (780, 640).into(),
				..Default::default()
			}),
			..Default::default()
		}))
		.add_plugins(EguiPlugin::default())
		// Resources
		.insert_resource(UiState {
			event_log: vec!["Welcome to Traffic Tamer".to_string()],
			toast: None,
			tick_accum: 0.0,
			request_rebuild_vehicles: true,
		})
		.insert_resource(GameSession {
			session: Session::new(Rules::default(), RNG_SEED),
		})
		// Setup
		.add_systems(Startup, (setup_camera, build_grid))
		// Frame systems
		.add_systems(
			Update,
			(
				handle_select_click,
				handle_move_keys,
				tick_session,
				rebuild_vehicles_when_needed,
				sync_vehicle_colors,
				update_toast_timer,
			),
		)
		.add_systems(EguiPrimaryContextPass, draw_ui)
		.run();
}

// ---------- Setup ----------
fn setup_camera(mut commands: Commands, game: Res<GameSession>) {
	let center_x = game.session.board().width() as f32 * TILE_SIZE * 0.5;
	let center_y = game.session.board().height() as f32 * TILE_SIZE * 0.5;
	commands.spawn((Camera2d, Transform::from_xyz(center_x, center_y, 1000.0)));
}

fn build_grid(mut commands: Commands, game: Res<GameSession>) {
	let board = game.session.board();
	for y in 0..board.height() {
		for x in 0..board.width() {
			let shade = if (x + y) % 2 == 0 { 0.82 } else { 0.78 };
			let cell = CellRect::new(CellCoord::new(x, y), 1, 1);
			let center = rect_center(board.height(), &cell);
			commands.spawn((
				Sprite::from_color(
					Color::srgb(shade, shade, shade),
					Vec2::new(TILE_SIZE - 1.0, TILE_SIZE - 1.0),
				),
				Transform::from_translation(center.extend(0.0)),
				GridTile,
			));
		}
	}
}

// ---------- Utilities ----------
// Board rows grow downward; bevy's y axis grows upward.
fn world_to_cell(board_height: i32, p: Vec2) -> CellCoord {
	let x = (p.x / TILE_SIZE).floor() as i32;
	let row = (p.y / TILE_SIZE).floor() as i32;
	CellCoord::new(x, board_height - 1 - row)
}

fn rect_center(board_height: i32, rect: &CellRect) -> Vec2 {
	Vec2::new(
		(rect.pos.x as f32 + rect.w as f32 * 0.5) * TILE_SIZE,
		(board_height as f32 - rect.pos.y as f32 - rect.h as f32 * 0.5) * TILE_SIZE,
	)
}

fn vehicle_color(kind: VehicleKind, selected: bool) -> Color {
	if selected {
		return Color::srgb(0.95, 0.8, 0.2);
	}
	match kind {
		VehicleKind::Car => Color::srgb(0.9, 0.3, 0.3),
		VehicleKind::Rickshaw => Color::srgb(0.2, 0.7, 0.45),
		VehicleKind::Bus => Color::srgb(0.25, 0.5, 0.9),
	}
}

fn screen_to_world_2d(
	camera_q: &Query<(&Camera, &GlobalTransform)>,
	screen_pos: Vec2,
) -> Option<Vec2> {
	let (camera, camera_transform) = camera_q.single().ok()?;
	camera.viewport_to_world_2d(camera_transform, screen_pos).ok()
}

fn set_toast(ui: &mut ResMut<UiState>, msg: impl Into<String>) {
	ui.toast = Some((msg.into(), 2.0));
}

// ---------- Systems: Board Rendering ----------
fn rebuild_vehicles_when_needed(
	mut commands: Commands,
	mut ui: ResMut<UiState>,
	game: Res<GameSession>,
	existing_layers: Query<Entity, With<VehicleLayer>>,
) {
	if !ui.request_rebuild_vehicles {
		return;
	}
	// Clear previous vehicle layer
	for e in &existing_layers {
		commands.entity(e).despawn();
	}
	let board = game.session.board();
	for v in board.alive() {
		let rect = v.rect();
		let center = rect_center(board.height(), &rect);
		let size = Vec2::new(
			rect.w as f32 * TILE_SIZE - 4.0,
			rect.h as f32 * TILE_SIZE - 4.0,
		);
		commands.spawn((
			Sprite::from_color(vehicle_color(v.kind, game.session.selected() == Some(v.id)), size),
			Transform::from_translation(center.extend(1.0)),
			VehicleSprite { id: v.id },
			VehicleLayer,
		));
	}
	ui.request_rebuild_vehicles = false;
}

fn sync_vehicle_colors(game: Res<GameSession>, mut q: Query<(&VehicleSprite, &mut Sprite)>) {
	for (marker, mut sprite) in &mut q {
		if let Some(v) = game.session.board().vehicle(marker.id) {
			sprite.color = vehicle_color(v.kind, game.session.selected() == Some(v.id));
		}
	}
}

// ---------- Systems: Input ----------
fn handle_select_click(
	windows: Query<&Window, With<PrimaryWindow>>,
	q_cam: Query<(&Camera, &GlobalTransform)>,
	mouse_buttons: Res<ButtonInput<MouseButton>>,
	mut game: ResMut<GameSession>,
) {
	if !mouse_buttons.just_pressed(MouseButton::Left) {
		return;
	}
	if game.session.phase() != Phase::Playing {
		return;
	}
	let window = if let Ok(w) = windows.single() { w } else { return };
	let cursor = if let Some(p) = window.cursor_position() { p } else { return };
	let world_pos = if let Some(wp) = screen_to_world_2d(&q_cam, cursor) { wp } else { return };
	let cell = world_to_cell(game.session.board().height(), world_pos);
	if let Some(id) = game.session.board().vehicle_at(cell) {
		game.session.select(id);
	}
}

fn handle_move_keys(
	keys: Res<ButtonInput<KeyCode>>,
	mut game: ResMut<GameSession>,
	mut ui: ResMut<UiState>,
) {
	if game.session.phase() != Phase::Playing || game.session.selected().is_none() {
		return;
	}
	let dir = if keys.any_just_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
		Some(Direction::Up)
	} else if keys.any_just_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
		Some(Direction::Down)
	} else if keys.any_just_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
		Some(Direction::Left)
	} else if keys.any_just_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
		Some(Direction::Right)
	} else {
		None
	};
	let Some(dir) = dir else { return };
	let level_before = game.session.level();
	match game.session.move_selected(dir) {
		MoveOutcome::Cleared => {
			ui.event_log.push(format!("Vehicle cleared moving {}", dir));
			set_toast(&mut ui, "Cleared! +100");
			if game.session.level() > level_before {
				let msg = format!("Level {} — more traffic incoming", game.session.level());
				ui.event_log.push(msg.clone());
				set_toast(&mut ui, msg);
			}
			ui.request_rebuild_vehicles = true;
		}
		MoveOutcome::Moved(_) => {
			ui.request_rebuild_vehicles = true;
		}
		MoveOutcome::Blocked | MoveOutcome::Ignored => {}
	}
}

// ---------- Systems: Clock ----------
fn tick_session(time: Res<Time>, mut game: ResMut<GameSession>, mut ui: ResMut<UiState>) {
	if game.session.phase() != Phase::Playing {
		// A reset or finished session must not accumulate tick debt.
		ui.tick_accum = 0.0;
		return;
	}
	ui.tick_accum += time.delta_secs();
	while ui.tick_accum >= TICK_SECONDS {
		ui.tick_accum -= TICK_SECONDS;
		if let Some(xp) = game.session.tick() {
			let final_score = game.session.score();
			ui.event_log.push(format!("Time! Final score {final_score}, {xp} XP earned"));
			set_toast(&mut ui, "Traffic jam! Time's up");
			ui.request_rebuild_vehicles = true;
			break;
		}
	}
}

// ---------- Systems: Toast ----------
fn update_toast_timer(time: Res<Time>, mut ui: ResMut<UiState>) {
	if let Some((_, ref mut remaining)) = ui.toast {
		*remaining -= time.delta_secs();
		if *remaining <= 0.0 {
			ui.toast = None;
		}
	}
}

// ---------- Systems: UI ----------
fn draw_ui(mut egui_ctx: EguiContexts, mut ui: ResMut<UiState>, mut game: ResMut<GameSession>) {
	if let Ok(ctx) = egui_ctx.ctx_mut() {

	let phase = game.session.phase();
	let controls = hud_controls(phase);

	// Top HUD
	egui::TopBottomPanel::top("top_hud").show(&*ctx, |ui_top| {
		ui_top.horizontal(|ui_row| {
			ui_row.label(format_hud(&game.session));
			ui_row.separator();
			ui_row.label(controls.status);
			ui_row.separator();
			match phase {
				Phase::Idle => {
					if ui_row.button(controls.start_label).clicked() {
						game.session.start();
						ui.event_log.push("Game started".to_string());
						ui.request_rebuild_vehicles = true;
					}
				}
				Phase::Playing => {
					if ui_row.button(controls.reset_label).clicked() {
						game.session.reset();
						ui.event_log.push("Game reset".to_string());
						ui.request_rebuild_vehicles = true;
					}
				}
				Phase::GameOver => {
					if ui_row.button("Play Again").clicked() {
						game.session.reset();
						game.session.start();
						ui.event_log.push("New game".to_string());
						ui.request_rebuild_vehicles = true;
					}
				}
			}
			if let Some((ref msg, _)) = ui.toast {
				ui_row.separator();
				ui_row.colored_label(egui::Color32::YELLOW, msg);
			}
		});
	});

	// Right panel (Vehicles)
	egui::SidePanel::right("right_panel")
		.resizable(true)
		.default_width(240.0)
		.show(&*ctx, |ui_right| {
			ui_right.heading(VEHICLE_PANEL_HEADING);
			egui::ScrollArea::vertical().show(ui_right, |ui_scroll| {
				let entries: Vec<(u32, String, bool)> = game
					.session
					.board()
					.alive()
					.map(|v| {
						(
							v.id,
							format!("{} #{} at ({}, {})", v.kind.label(), v.id, v.pos.x, v.pos.y),
							game.session.selected() == Some(v.id),
						)
					})
					.collect();
				let mut clicked = None;
				for (id, label, selected) in &entries {
					if ui_scroll.selectable_label(*selected, label).clicked() {
						clicked = Some(*id);
					}
				}
				if let Some(id) = clicked {
					game.session.select(id);
				}
			});
			ui_right.separator();
			ui_right.label(instruction_line(phase, game.session.selected()));
		});

	// Bottom event log
	egui::TopBottomPanel::bottom("bottom_log").resizable(true).show(&*ctx, |ui_bottom| {
		ui_bottom.heading(LOG_PANEL_HEADING);
		egui::ScrollArea::vertical().stick_to_bottom(true).show(ui_bottom, |ui_logs| {
			for line in &ui.event_log {
				ui_logs.label(line);
			}
		});
	});

	} // end if Ok(ctx)
}
