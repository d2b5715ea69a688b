//! The house as a validated room graph.
//!
//! `HouseGraph` is built once from room definitions and never mutated.
//! Construction interns room names into dense ids, preserves each room's
//! declared connection order, and rejects layouts where any room cannot
//! reach every other room.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dense room index assigned in declaration order.
pub type RoomId = u32;

/// Input definition for a single room, as it appears in layout data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub name: String,
    /// Names of directly reachable rooms, in declared order.
    pub connections: Vec<String>,
    /// Ambient color for the render layer; opaque here.
    #[serde(default)]
    pub ambient: String,
}

/// Errors detected while building or querying the house graph.
///
/// All of these are configuration errors: they surface once at load time,
/// never during a running night.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HouseError {
    #[error("house layout has no rooms")]
    Empty,
    #[error("duplicate room `{0}`")]
    DuplicateRoom(String),
    #[error("unknown room `{0}`")]
    UnknownRoom(String),
    #[error("no room with id {0}")]
    UnknownRoomId(RoomId),
    #[error("room `{from}` cannot reach `{to}`")]
    Disconnected { from: String, to: String },
}

#[derive(Debug, Clone)]
struct Room {
    name: String,
    ambient: String,
    connections: Vec<RoomId>,
}

/// Static, validated topology of the house.
#[derive(Debug, Clone)]
pub struct HouseGraph {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
}

impl HouseGraph {
    /// Build and validate a graph from room definitions.
    ///
    /// Fails fast on unknown connection targets and on layouts where some
    /// room cannot reach every other. Edges may be asymmetric, so
    /// reachability is checked from every room, not just the first.
    pub fn build(defs: &[RoomDef]) -> Result<Self, HouseError> {
        if defs.is_empty() {
            return Err(HouseError::Empty);
        }

        let mut by_name = HashMap::new();
        for (i, def) in defs.iter().enumerate() {
            if by_name.insert(def.name.clone(), i as RoomId).is_some() {
                return Err(HouseError::DuplicateRoom(def.name.clone()));
            }
        }

        let mut rooms = Vec::with_capacity(defs.len());
        for def in defs {
            let mut connections = Vec::with_capacity(def.connections.len());
            for target in &def.connections {
                let id = by_name
                    .get(target)
                    .copied()
                    .ok_or_else(|| HouseError::UnknownRoom(target.clone()))?;
                connections.push(id);
            }
            rooms.push(Room {
                name: def.name.clone(),
                ambient: def.ambient.clone(),
                connections,
            });
        }

        let graph = Self { rooms, by_name };
        graph.check_connectivity()?;
        Ok(graph)
    }

    /// Neighbors of a room, in declared order.
    pub fn neighbors(&self, id: RoomId) -> Result<&[RoomId], HouseError> {
        self.rooms
            .get(id as usize)
            .map(|r| r.connections.as_slice())
            .ok_or(HouseError::UnknownRoomId(id))
    }

    /// Resolve a room name to its id.
    pub fn id_of(&self, name: &str) -> Result<RoomId, HouseError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| HouseError::UnknownRoom(name.to_string()))
    }

    pub fn name_of(&self, id: RoomId) -> Result<&str, HouseError> {
        self.rooms
            .get(id as usize)
            .map(|r| r.name.as_str())
            .ok_or(HouseError::UnknownRoomId(id))
    }

    /// Ambient color string for a room.
    pub fn ambient_of(&self, id: RoomId) -> Result<&str, HouseError> {
        self.rooms
            .get(id as usize)
            .map(|r| r.ambient.as_str())
            .ok_or(HouseError::UnknownRoomId(id))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All room ids, in declaration order.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> {
        0..self.rooms.len() as RoomId
    }

    /// Every room must reach every other room; a one-way door is allowed
    /// but still has to be escapable.
    fn check_connectivity(&self) -> Result<(), HouseError> {
        for start in self.room_ids() {
            let mut visited = vec![false; self.rooms.len()];
            visited[start as usize] = true;
            let mut queue = VecDeque::new();
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                for &next in &self.rooms[current as usize].connections {
                    if !visited[next as usize] {
                        visited[next as usize] = true;
                        queue.push_back(next);
                    }
                }
            }

            if let Some(missed) = visited.iter().position(|&v| !v) {
                return Err(HouseError::Disconnected {
                    from: self.rooms[start as usize].name.clone(),
                    to: self.rooms[missed].name.clone(),
                });
            }
        }
        Ok(())
    }
}
