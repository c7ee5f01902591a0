//! Components an entity can carry, and the bag that holds them.
//!
//! Every entity owns exactly one [`Transform`]; every other kind is optional
//! and at most one of each may be attached.  Systems ask the bag whether a
//! capability is present (`has::<Collider>()`) and skip the behaviour when it
//! is not; a missing component is never an error.
//!
//! ```rust,ignore
//! if let Some(collider) = entity.components.get::<Collider>() {
//!     clamp(&mut pos, collider.size);
//! }
//! ```

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::transform::Transform;

// ─── Component data ────────────────────────────────────────────────────────

/// Coloured rectangle drawn at the entity's transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprite {
    /// Asset the sprite was created from.  Texturing is not implemented; the
    /// id is carried for the editor.
    pub texture_id: String,
    /// CSS hex colour, e.g. `"#3b82f6"`.
    pub color: String,
    /// Stored but not used for ordering: entities draw in insertion order.
    pub z_index: i32,
}

/// Axis-aligned box used to keep the entity inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collider {
    #[serde(with = "crate::serde_vec2")]
    pub size: Vec2,
    /// Stored but unused; there is no entity-entity collision.
    pub is_trigger: bool,
}

/// Marks an entity as driven by the movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerController {
    /// Displacement per tick (or per second, depending on the engine's
    /// movement policy).
    pub speed: f32,
}

/// Script source attached to an entity.  Never executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub source: String,
}

// ─── Kinds ─────────────────────────────────────────────────────────────────

/// Discriminant of every component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Transform,
    Sprite,
    Collider,
    Script,
    PlayerController,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Transform,
        ComponentKind::Sprite,
        ComponentKind::Collider,
        ComponentKind::Script,
        ComponentKind::PlayerController,
    ];

    /// Key used for this kind in world snapshots.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::Sprite => "Sprite",
            ComponentKind::Collider => "Collider",
            ComponentKind::Script => "Script",
            ComponentKind::PlayerController => "PlayerController",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single component of any kind, for APIs that move components around
/// without caring about their concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyComponent {
    Transform(Transform),
    Sprite(Sprite),
    Collider(Collider),
    Script(Script),
    PlayerController(PlayerController),
}

impl AnyComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            AnyComponent::Transform(_) => ComponentKind::Transform,
            AnyComponent::Sprite(_) => ComponentKind::Sprite,
            AnyComponent::Collider(_) => ComponentKind::Collider,
            AnyComponent::Script(_) => ComponentKind::Script,
            AnyComponent::PlayerController(_) => ComponentKind::PlayerController,
        }
    }
}

// ─── Typed access ──────────────────────────────────────────────────────────

/// Implemented by every component type so the bag can hand out typed
/// references: `components.get::<Collider>()`.
pub trait Component: Sized + Into<AnyComponent> {
    const KIND: ComponentKind;

    fn slot(bag: &Components) -> Option<&Self>;
    fn slot_mut(bag: &mut Components) -> Option<&mut Self>;
}

macro_rules! optional_component {
    ($ty:ident, $field:ident) => {
        impl Component for $ty {
            const KIND: ComponentKind = ComponentKind::$ty;

            fn slot(bag: &Components) -> Option<&Self> {
                bag.$field.as_ref()
            }

            fn slot_mut(bag: &mut Components) -> Option<&mut Self> {
                bag.$field.as_mut()
            }
        }

        impl From<$ty> for AnyComponent {
            fn from(c: $ty) -> Self {
                AnyComponent::$ty(c)
            }
        }
    };
}

optional_component!(Sprite, sprite);
optional_component!(Collider, collider);
optional_component!(Script, script);
optional_component!(PlayerController, player_controller);

impl Component for Transform {
    const KIND: ComponentKind = ComponentKind::Transform;

    fn slot(bag: &Components) -> Option<&Self> {
        Some(&bag.transform)
    }

    fn slot_mut(bag: &mut Components) -> Option<&mut Self> {
        Some(&mut bag.transform)
    }
}

impl From<Transform> for AnyComponent {
    fn from(c: Transform) -> Self {
        AnyComponent::Transform(c)
    }
}

// ─── Bag ───────────────────────────────────────────────────────────────────

/// Per-entity component storage.
///
/// Serialized as a map keyed by kind name; absent optional kinds are simply
/// left out of the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(rename = "Transform")]
    transform: Transform,
    #[serde(rename = "Sprite", default, skip_serializing_if = "Option::is_none")]
    sprite: Option<Sprite>,
    #[serde(rename = "Collider", default, skip_serializing_if = "Option::is_none")]
    collider: Option<Collider>,
    #[serde(rename = "Script", default, skip_serializing_if = "Option::is_none")]
    script: Option<Script>,
    #[serde(
        rename = "PlayerController",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    player_controller: Option<PlayerController>,
}

impl Components {
    /// A bag holding only the given transform.
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            ..Default::default()
        }
    }

    /// `true` when a component of type `C` is attached.
    #[inline]
    pub fn has<C: Component>(&self) -> bool {
        C::slot(self).is_some()
    }

    #[inline]
    pub fn get<C: Component>(&self) -> Option<&C> {
        C::slot(self)
    }

    #[inline]
    pub fn get_mut<C: Component>(&mut self) -> Option<&mut C> {
        C::slot_mut(self)
    }

    /// The mandatory transform.
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Attach `component`, returning the one of the same kind it replaced.
    ///
    /// Inserting a `Transform` replaces the existing transform and returns
    /// it, keeping the one-transform invariant.
    pub fn insert(&mut self, component: impl Into<AnyComponent>) -> Option<AnyComponent> {
        match component.into() {
            AnyComponent::Transform(t) => Some(AnyComponent::Transform(std::mem::replace(
                &mut self.transform,
                t,
            ))),
            AnyComponent::Sprite(c) => self.sprite.replace(c).map(Into::into),
            AnyComponent::Collider(c) => self.collider.replace(c).map(Into::into),
            AnyComponent::Script(c) => self.script.replace(c).map(Into::into),
            AnyComponent::PlayerController(c) => {
                self.player_controller.replace(c).map(Into::into)
            }
        }
    }

    /// Detach the component of the given kind.
    ///
    /// The transform cannot be removed: asking for it returns `None` and
    /// leaves the bag untouched.
    pub fn remove(&mut self, kind: ComponentKind) -> Option<AnyComponent> {
        match kind {
            ComponentKind::Transform => None,
            ComponentKind::Sprite => self.sprite.take().map(Into::into),
            ComponentKind::Collider => self.collider.take().map(Into::into),
            ComponentKind::Script => self.script.take().map(Into::into),
            ComponentKind::PlayerController => self.player_controller.take().map(Into::into),
        }
    }

    /// Kinds currently attached, in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL.into_iter().filter(move |kind| match kind {
            ComponentKind::Transform => true,
            ComponentKind::Sprite => self.sprite.is_some(),
            ComponentKind::Collider => self.collider.is_some(),
            ComponentKind::Script => self.script.is_some(),
            ComponentKind::PlayerController => self.player_controller.is_some(),
        })
    }
}
