// Copyright 2026 embergfx
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end behaviour of the snapshot/command pipeline: managers feeding a
//! scheduler, a simulated renderer consuming the command lists, and the
//! resource lifecycle guarantees that hold across frames and threads.

use ember_core::math::{Color, Extent2d};
use ember_core::renderer::{RenderShader, RenderTexture, ShaderId, TextureFormat, TextureId};
use ember_data::{FrameAllocator, PoolLimitPolicy};
use ember_render::material::{
    ForwardRenderMaterialGroupManager, ForwardShaders, MaterialState, RenderMaterialGroupManager,
};
use ember_render::target::{RenderTargetGroupId, RenderTargetGroupManager};
use ember_render::{RenderCommand, RenderFrameScheduler, RenderSnapshotSystem, TargetType};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

fn colour_texture(id: u64) -> Arc<RenderTexture> {
    Arc::new(RenderTexture::new(
        TextureId(id),
        Extent2d::new(1024, 768),
        TextureFormat::Rgba8,
    ))
}

fn depth_texture(id: u64) -> Arc<RenderTexture> {
    Arc::new(RenderTexture::new(
        TextureId(id),
        Extent2d::new(1024, 768),
        TextureFormat::Depth32Float,
    ))
}

fn shader(id: u64, label: &str) -> Arc<RenderShader> {
    Arc::new(RenderShader::new(ShaderId(id), label))
}

fn stock_shaders() -> ForwardShaders {
    ForwardShaders {
        sprite_unlit: shader(1, "Sprite-Unlit"),
        static_unlit: shader(2, "Static-Unlit"),
        animated_unlit: shader(3, "Animated-Unlit"),
        static_lit_base: shader(4, "Static-Lit-Base"),
        static_lit_directional: shader(5, "Static-Lit-Directional"),
        animated_lit_base: shader(6, "Animated-Lit-Base"),
        animated_lit_directional: shader(7, "Animated-Lit-Directional"),
        skybox: shader(8, "Skybox"),
        static_shadow_map: Some(shader(9, "Static-ShadowMap")),
        animated_shadow_map: Some(shader(10, "Animated-ShadowMap")),
    }
}

/// One simulated frame: snapshot, claim, "execute" the pre-render list,
/// then the post-render list. Returns the counts of (load, unload) commands
/// processed. Dropping the post-render list stands in for the render thread
/// finishing the unload commands.
fn run_frame(
    scheduler: &RenderFrameScheduler,
    frame_allocator: &mut FrameAllocator,
) -> (usize, usize) {
    let mut snapshot = scheduler.snapshot_frame(
        TargetType::Main,
        Extent2d::new(1024, 768),
        Color::BLACK,
        frame_allocator,
    );
    let (pre, post) = snapshot.claim_render_command_lists();
    let loads = pre.len();
    let unloads = post.len();
    drop(pre);
    drop(post);
    frame_allocator.reset();
    (loads, unloads)
}

#[test]
fn full_lifecycle_across_frames() {
    let target_manager = Arc::new(RenderTargetGroupManager::new());
    let material_manager = Arc::new(ForwardRenderMaterialGroupManager::new(stock_shaders()));

    let mut scheduler = RenderFrameScheduler::new();
    scheduler.register_system(target_manager.clone());
    scheduler.register_system(material_manager.clone());

    let mut frame_allocator = FrameAllocator::new(4096);

    // Frame 1: both groups created before the snapshot; both loads appear.
    let target = target_manager.create_render_target_group(colour_texture(1), depth_texture(2));
    let material =
        material_manager.create_unlit_render_material_group(colour_texture(3), MaterialState::opaque());

    let (loads, unloads) = run_frame(&scheduler, &mut frame_allocator);
    assert_eq!((loads, unloads), (2, 0));

    // Frame 2: nothing changed; nothing is drained.
    let (loads, unloads) = run_frame(&scheduler, &mut frame_allocator);
    assert_eq!((loads, unloads), (0, 0));

    // Frame 3: both destroyed; both unloads appear exactly once.
    target_manager.destroy_render_target_group(target);
    material_manager.destroy_render_material_group(material);
    let (loads, unloads) = run_frame(&scheduler, &mut frame_allocator);
    assert_eq!((loads, unloads), (0, 2));

    // Frame 4: quiet again.
    let (loads, unloads) = run_frame(&scheduler, &mut frame_allocator);
    assert_eq!((loads, unloads), (0, 0));

    assert!(target_manager.render_target_groups().is_empty());
    assert!(material_manager.render_material_groups().is_empty());
}

#[test]
fn unload_processing_releases_the_pool_slot() {
    let manager = Arc::new(RenderTargetGroupManager::with_pool_capacity(
        1,
        PoolLimitPolicy::Fixed,
    ));
    let mut scheduler = RenderFrameScheduler::new();
    scheduler.register_system(manager.clone());
    let mut frame_allocator = FrameAllocator::new(4096);

    let group = manager.create_colour_render_target_group(colour_texture(1), true);
    let first_addr = group.as_ptr();

    // Load drains in frame 1.
    run_frame(&scheduler, &mut frame_allocator);

    manager.destroy_render_target_group(group);

    // The unload command is processed (dropped) inside frame 2, after which
    // the single pool slot is free again.
    run_frame(&scheduler, &mut frame_allocator);

    let next = manager.create_colour_render_target_group(colour_texture(2), true);
    assert_eq!(next.as_ptr(), first_addr);
    manager.destroy_render_target_group(next);
}

#[test]
fn same_frame_create_and_destroy_keeps_load_before_unload() {
    let manager = Arc::new(RenderTargetGroupManager::new());
    let allocator = FrameAllocator::new(4096);

    let group = manager.create_depth_render_target_group(depth_texture(1));
    let id = group.id();
    manager.destroy_render_target_group(group);

    let mut snapshot = ember_render::RenderSnapshot::new(
        TargetType::Main,
        Extent2d::new(1024, 768),
        Color::BLACK,
    );
    manager.on_render_snapshot(TargetType::Main, &mut snapshot, &allocator);

    // The load sits in the pre-render list and the unload in the post-render
    // list of the same frame, so the renderer still observes load, use,
    // unload in order.
    let (pre, post) = snapshot.claim_render_command_lists();
    assert_eq!(pre.len(), 1);
    assert_eq!(post.len(), 1);
    match pre.iter().next().unwrap() {
        RenderCommand::LoadTargetGroup { desc } => assert_eq!(desc.id, id),
        other => panic!("expected a load command, got {other:?}"),
    }
    match post.into_iter().next().unwrap() {
        RenderCommand::UnloadTargetGroup { group } => assert_eq!(group.id(), id),
        other => panic!("expected an unload command, got {other:?}"),
    }
}

#[test]
fn concurrent_producers_lose_no_commands() {
    const CREATES_PER_PRODUCER: usize = 1000;

    let manager = Arc::new(RenderTargetGroupManager::new());
    let created: Arc<Mutex<Vec<_>>> = Arc::new(Mutex::new(Vec::new()));
    let done = Arc::new(AtomicBool::new(false));

    let observed_loads: Arc<Mutex<Vec<RenderTargetGroupId>>> =
        Arc::new(Mutex::new(Vec::new()));

    // The render thread: drains a snapshot repeatedly while producers run.
    let drainer = {
        let manager = manager.clone();
        let done = done.clone();
        let observed_loads = observed_loads.clone();
        thread::spawn(move || {
            let mut frame_allocator = FrameAllocator::new(4096);
            loop {
                let finished = done.load(Ordering::SeqCst);
                let mut snapshot = ember_render::RenderSnapshot::new(
                    TargetType::Main,
                    Extent2d::new(1024, 768),
                    Color::BLACK,
                );
                manager.on_render_snapshot(TargetType::Main, &mut snapshot, &frame_allocator);
                let (pre, _post) = snapshot.claim_render_command_lists();
                let mut observed = observed_loads.lock().unwrap();
                for command in &pre {
                    match command {
                        RenderCommand::LoadTargetGroup { desc } => observed.push(desc.id),
                        other => panic!("unexpected command {other:?}"),
                    }
                }
                drop(observed);
                frame_allocator.reset();
                // One final drain after the producers have finished.
                if finished {
                    break;
                }
                thread::yield_now();
            }
        })
    };

    let producers: Vec<_> = (0..2)
        .map(|p| {
            let manager = manager.clone();
            let created = created.clone();
            thread::spawn(move || {
                for i in 0..CREATES_PER_PRODUCER {
                    let texture = colour_texture((p * CREATES_PER_PRODUCER + i) as u64);
                    let group = manager.create_colour_render_target_group(texture, false);
                    created.lock().unwrap().push(group);
                }
            })
        })
        .collect();

    for producer in producers {
        producer.join().unwrap();
    }
    done.store(true, Ordering::SeqCst);
    drainer.join().unwrap();

    // Every create produced exactly one load command, none twice.
    let observed = observed_loads.lock().unwrap();
    assert_eq!(observed.len(), 2 * CREATES_PER_PRODUCER);
    let unique: HashSet<_> = observed.iter().copied().collect();
    assert_eq!(unique.len(), 2 * CREATES_PER_PRODUCER);

    // And the live set matches what the producers still hold.
    assert_eq!(
        manager.render_target_groups().len(),
        2 * CREATES_PER_PRODUCER
    );

    for group in created.lock().unwrap().drain(..) {
        manager.destroy_render_target_group(group);
    }
    assert!(manager.render_target_groups().is_empty());
}
