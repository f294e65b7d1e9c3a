use bevy::log::info;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::observer::Trajectory;

#[derive(Component)]
struct BodyIndex(pub usize);

const SCALE: f32 = 50.0;
const RADIUS: f32 = 4.0;

/// Recorded frames replayed one per `Update`, looping at the end
#[derive(Resource)]
struct Playback {
    frames: Vec<Vec<Vec2>>, // frames[step][body]
    masses: Vec<f64>,
    current: usize,
}

impl Playback {
    fn from_trajectory(trajectory: &Trajectory, masses: Vec<f64>) -> Self {
        let mut frames: Vec<Vec<Vec2>> = Vec::new();
        for o in &trajectory.observations {
            if frames.len() <= o.step {
                frames.resize_with(o.step + 1, Vec::new);
            }
            frames[o.step].push(Vec2::new(o.position.x as f32, o.position.y as f32));
        }
        Self {
            frames,
            masses,
            current: 0,
        }
    }
}

/// Replay a recorded run in a Bevy 2D window. Heavier bodies are drawn larger.
pub fn run_2d(trajectory: &Trajectory, masses: Vec<f64>) {
    let playback = Playback::from_trajectory(trajectory, masses);
    info!("run_2d: replaying {} frames", playback.frames.len());

    App::new()
        .insert_resource(playback)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (advance_playback_system, sync_transforms_system).chain())
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    playback: Res<Playback>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let Some(first) = playback.frames.first() else {
        return;
    };
    let lightest = playback.masses.iter().cloned().fold(f64::INFINITY, f64::min);

    for (i, pos) in first.iter().enumerate() {
        // Log-scaled marker size relative to the lightest body
        let ratio = playback.masses.get(i).map_or(1.0, |m| m / lightest);
        let radius_screen = RADIUS + (ratio.ln() as f32).max(0.0) * 0.5;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(pos.x * SCALE, pos.y * SCALE, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn advance_playback_system(mut playback: ResMut<Playback>) {
    let len = playback.frames.len();
    if len == 0 {
        return;
    }
    let next = (playback.current + 1) % len;
    playback.current = next;
}

fn sync_transforms_system(playback: Res<Playback>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let Some(frame) = playback.frames.get(playback.current) else {
        return;
    };
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(p) = frame.get(*i) {
            transform.translation.x = p.x * SCALE;
            transform.translation.y = p.y * SCALE;
        }
    }
}
