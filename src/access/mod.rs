//! Network access control
//!
//! Roles and permission levels each form a fixed total order:
//! - Roles: Guest < User < Moderator < Admin
//! - Permissions: ReadOnly < Partial < Elevated < Full
//!
//! An access lattice maps roles to permission levels and answers
//! authorization queries against that mapping. Admin resolves to Full
//! before any table lookup; the override is a rule of the system, not a
//! row in the table. Lattices are immutable after construction and safe
//! to share without synchronization.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access control errors
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown permission level: {0}")]
    UnknownPermission(String),
}

/// Roles a visitor can hold on a network.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(u8)]
pub enum Role {
    /// Unauthenticated visitor
    #[default]
    Guest = 0,
    /// Registered member
    User = 1,
    /// Trusted member with moderation duties
    Moderator = 2,
    /// Runs the network; always granted every permission
    Admin = 3,
}

impl Role {
    /// All roles, weakest first.
    pub fn all() -> &'static [Role] {
        &[Role::Guest, Role::User, Role::Moderator, Role::Admin]
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "user" => Ok(Role::User),
            "moderator" | "mod" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            other => Err(AccessError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

/// Permission levels, weakest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(u8)]
pub enum Permission {
    /// Observe only
    #[default]
    ReadOnly = 0,
    /// Limited interaction
    Partial = 1,
    /// Most operations
    Elevated = 2,
    /// Everything
    Full = 3,
}

impl Permission {
    /// Whether this level satisfies a required level.
    pub fn allows(self, required: Permission) -> bool {
        self >= required
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "readonly" | "read_only" => Ok(Permission::ReadOnly),
            "partial" => Ok(Permission::Partial),
            "elevated" => Ok(Permission::Elevated),
            "full" | "fullaccess" => Ok(Permission::Full),
            other => Err(AccessError::UnknownPermission(other.to_string())),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Permission::ReadOnly => "readonly",
            Permission::Partial => "partial",
            Permission::Elevated => "elevated",
            Permission::Full => "full",
        };
        write!(f, "{}", s)
    }
}

/// A role→permission table plus the Admin override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLattice {
    table: HashMap<Role, Permission>,
}

impl Default for AccessLattice {
    fn default() -> Self {
        let table = HashMap::from([
            (Role::Admin, Permission::Full),
            (Role::Moderator, Permission::Elevated),
            (Role::User, Permission::Partial),
            (Role::Guest, Permission::ReadOnly),
        ]);
        Self { table }
    }
}

impl AccessLattice {
    /// The stock lattice: Admin→Full, Moderator→Elevated, User→Partial,
    /// Guest→ReadOnly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A lattice with a custom table.
    ///
    /// The table may be partial; looking up a role it omits is an error,
    /// except Admin, which resolves to Full regardless of the table.
    pub fn with_table(table: HashMap<Role, Permission>) -> Self {
        Self { table }
    }

    /// The permission level a role holds.
    pub fn permission_for(&self, role: Role) -> Result<Permission, AccessError> {
        // Admin always has full access, whatever the table says
        if role == Role::Admin {
            return Ok(Permission::Full);
        }
        self.table
            .get(&role)
            .copied()
            .ok_or_else(|| AccessError::UnknownRole(role.to_string()))
    }

    /// Whether a role satisfies a required permission level.
    pub fn authorize(&self, role: Role, required: Permission) -> Result<bool, AccessError> {
        Ok(self.permission_for(role)?.allows(required))
    }
}

/// A network the runner can be present on.
///
/// Reputation and fingerprint are bookkeeping for the surrounding game;
/// nothing in this crate grows or spends them. The access control table
/// belongs to the network itself; the assigned role is the runner's
/// standing on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    /// How network members perceive the runner
    pub local_reputation: i32,
    /// Grows with high-profile break-ins; a bigger fingerprint makes the
    /// runner easier to spot
    pub fingerprint: i32,
    /// The runner's current role on this network
    pub assigned_role: Role,
    /// Who is allowed to do what
    pub access_control: AccessLattice,
}

impl Network {
    /// A freshly discovered network: guest role, stock access table.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            local_reputation: 0,
            fingerprint: 0,
            assigned_role: Role::Guest,
            access_control: AccessLattice::new(),
        }
    }

    /// Whether the runner's current role satisfies a required permission
    /// on this network.
    pub fn authorized_for(&self, required: Permission) -> Result<bool, AccessError> {
        self.access_control.authorize(self.assigned_role, required)
    }
}
