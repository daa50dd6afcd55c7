//! Scene: entity registry, movement and per-tick entity updates
//!
//! The scene owns every [`Entity`] and every [`Animation`] in
//! generation-checked arenas. Draw order is insertion order. One entity may
//! be marked as *controlled* (the one input moves) and one as the camera's
//! *follow target*; both are explicit ids and are cleared when their entity
//! is despawned.

pub mod entity;

pub use entity::{Entity, EntityFlags, EntityId, AnimationId, WHITE};

use slotmap::SlotMap;
use thiserror::Error;

use crate::animation::{Animation, FrameRect};
use crate::foundation::math::{Mat4, Mat4Ext, Vec2};
use crate::physics::{resolve_move, Aabb, MoveResult};
use crate::render::{Camera, FrameData, RenderItem};

/// Scene errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Id does not name a live entity
    #[error("Unknown entity: {0:?}")]
    UnknownEntity(EntityId),

    /// Id does not name a live animation
    #[error("Unknown animation: {0:?}")]
    UnknownAnimation(AnimationId),
}

/// Change in the controlled entity's collision state between two ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// Movement started being blocked
    Started,
    /// Movement is no longer blocked
    Ended,
}

impl CollisionEvent {
    /// Event for a transition from `was_colliding` to `is_colliding`
    pub fn from_transition(was_colliding: bool, is_colliding: bool) -> Option<Self> {
        match (was_colliding, is_colliding) {
            (false, true) => Some(Self::Started),
            (true, false) => Some(Self::Ended),
            _ => None,
        }
    }
}

/// Entity and animation storage
#[derive(Debug, Default)]
pub struct Scene {
    entities: SlotMap<EntityId, Entity>,
    order: Vec<EntityId>,
    animations: SlotMap<AnimationId, Animation>,
    controlled: Option<EntityId>,
    follow_target: Option<EntityId>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity at the end of the draw order
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = self.entities.insert(entity);
        self.order.push(id);
        log::trace!("Spawned entity {:?}", id);
        id
    }

    /// Remove an entity
    ///
    /// Clears the controlled entity and follow target if they named it. The
    /// entity's animation stays in the scene.
    pub fn despawn(&mut self, id: EntityId) -> Result<Entity, SceneError> {
        let entity = self.entities.remove(id).ok_or(SceneError::UnknownEntity(id))?;
        self.order.retain(|&other| other != id);

        if self.controlled == Some(id) {
            log::debug!("Controlled entity {:?} despawned", id);
            self.controlled = None;
        }
        if self.follow_target == Some(id) {
            log::debug!("Follow target {:?} despawned", id);
            self.follow_target = None;
        }
        Ok(entity)
    }

    /// Entity by id
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Mutable entity by id
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Whether `id` names a live entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.order.iter().filter_map(move |&id| self.entities.get(id).map(|entity| (id, entity)))
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Choose the entity input moves; `None` releases control
    pub fn set_controlled(&mut self, id: Option<EntityId>) -> Result<(), SceneError> {
        self.check_entity(id)?;
        self.controlled = id;
        Ok(())
    }

    /// Entity input moves
    pub fn controlled(&self) -> Option<EntityId> {
        self.controlled
    }

    /// Choose the entity the camera follows; `None` leaves the camera still
    pub fn set_follow_target(&mut self, id: Option<EntityId>) -> Result<(), SceneError> {
        self.check_entity(id)?;
        self.follow_target = id;
        Ok(())
    }

    /// Entity the camera follows
    pub fn follow_target(&self) -> Option<EntityId> {
        self.follow_target
    }

    /// Current position of the follow target
    pub fn follow_position(&self) -> Option<Vec2> {
        self.follow_target.and_then(|id| self.get(id)).map(|entity| entity.position)
    }

    fn check_entity(&self, id: Option<EntityId>) -> Result<(), SceneError> {
        match id {
            Some(id) if !self.contains(id) => Err(SceneError::UnknownEntity(id)),
            _ => Ok(()),
        }
    }

    /// Store an animation
    pub fn add_animation(&mut self, animation: Animation) -> AnimationId {
        self.animations.insert(animation)
    }

    /// Animation by id
    pub fn animation(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id)
    }

    /// Mutable animation by id
    pub fn animation_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.get_mut(id)
    }

    /// Remove an animation and detach it from every entity using it
    pub fn remove_animation(&mut self, id: AnimationId) -> Result<Animation, SceneError> {
        let animation = self.animations.remove(id).ok_or(SceneError::UnknownAnimation(id))?;
        for entity in self.entities.values_mut() {
            if entity.animation == Some(id) {
                entity.animation = None;
            }
        }
        Ok(animation)
    }

    /// Drive `entity`'s frame from `animation`; `None` detaches
    pub fn attach_animation(&mut self, entity: EntityId, animation: Option<AnimationId>) -> Result<(), SceneError> {
        if let Some(animation) = animation {
            if !self.animations.contains_key(animation) {
                return Err(SceneError::UnknownAnimation(animation));
            }
        }
        let target = self.entities.get_mut(entity).ok_or(SceneError::UnknownEntity(entity))?;
        target.animation = animation;
        Ok(())
    }

    /// Bounds of every obstacle except `mover`
    pub fn obstacle_bounds(&self, mover: EntityId) -> impl Iterator<Item = Aabb> + '_ {
        self.entities
            .iter()
            .filter(move |&(id, entity)| id != mover && entity.is_obstacle())
            .map(|(_, entity)| entity.bounds())
    }

    /// Move an entity by `delta`, blocked per axis by obstacles
    pub fn move_entity(&mut self, id: EntityId, delta: Vec2) -> Result<MoveResult, SceneError> {
        let mover = self.get(id).ok_or(SceneError::UnknownEntity(id))?.bounds();
        let result = resolve_move(&mover, delta, self.obstacle_bounds(id));

        if let Some(entity) = self.entities.get_mut(id) {
            entity.position = result.apply_to(entity.position);
        }
        Ok(result)
    }

    /// Move the controlled entity by `direction * speed * delta_time`
    ///
    /// Without a controlled entity nothing moves and the result is empty.
    pub fn move_controlled(&mut self, direction: Vec2, speed: f32, delta_time: f32) -> MoveResult {
        let Some(id) = self.controlled else {
            return MoveResult::default();
        };

        match self.move_entity(id, direction * speed * delta_time) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("Dropping stale controlled entity: {}", err);
                self.controlled = None;
                MoveResult::default()
            }
        }
    }

    /// Whether `id` currently overlaps any obstacle
    ///
    /// Unknown ids never collide.
    pub fn check_collisions(&self, id: EntityId) -> bool {
        let Some(entity) = self.get(id) else {
            return false;
        };
        let bounds = entity.bounds();
        self.obstacle_bounds(id).any(|obstacle| bounds.intersects(&obstacle))
    }

    /// Advance every stored animation once
    pub fn advance_animations(&mut self, delta_time: f32) {
        for animation in self.animations.values_mut() {
            animation.advance(delta_time);
        }
    }

    /// Frame rectangle an entity is drawn with
    ///
    /// Entities without an animation, or whose animation is gone, use the full
    /// texture.
    pub fn current_frame(&self, id: EntityId) -> FrameRect {
        self.get(id)
            .and_then(|entity| entity.animation)
            .and_then(|animation| self.animation(animation))
            .map_or(FrameRect::FULL, Animation::current_frame)
    }

    /// Draw items for every visible entity in insertion order
    pub fn render_items(&self) -> Vec<RenderItem> {
        self.iter()
            .filter(|(_, entity)| entity.is_visible())
            .map(|(id, entity)| RenderItem {
                entity: id,
                model: Mat4::model_2d(entity.position, entity.size()),
                texture: entity.texture,
                uv: self.current_frame(id),
                color: entity.color,
            })
            .collect()
    }

    /// Everything the renderer needs to draw the scene through `camera`
    pub fn frame_data(&self, camera: &Camera) -> FrameData {
        FrameData {
            view: camera.view_matrix(),
            projection: camera.viewport_projection(),
            items: self.render_items(),
        }
    }

    /// Drop every entity and animation
    pub fn clear(&mut self) {
        log::info!(
            "Clearing scene ({} entities, {} animations)",
            self.entities.len(),
            self.animations.len()
        );
        self.entities.clear();
        self.order.clear();
        self.animations.clear();
        self.controlled = None;
        self.follow_target = None;
    }
}
