//! Resource/operation selection and the routing table

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TootError};
use crate::impl_wire_name_conversions;

/// Top-level API entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    #[default]
    Status,
    Account,
    Notification,
}

impl_wire_name_conversions!(Resource {
    Status => "status",
    Account => "account",
    Notification => "notification",
});

impl Resource {
    /// Operation selected when none is given for this resource.
    pub fn default_operation(&self) -> Operation {
        match self {
            Self::Status => Operation::Post,
            Self::Account => Operation::GetFollowers,
            Self::Notification => Operation::GetAll,
        }
    }

    /// Operations available within this resource.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            Self::Status => &[Operation::Post],
            Self::Account => &[Operation::GetFollowers, Operation::Block, Operation::Unblock],
            Self::Notification => &[Operation::GetAll],
        }
    }
}

/// Action within a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Post,
    GetFollowers,
    Block,
    Unblock,
    GetAll,
}

impl_wire_name_conversions!(Operation {
    Post => "post",
    GetFollowers => "getFollowers",
    Block => "block",
    Unblock => "unblock",
    GetAll => "getAll",
});

/// A (resource, operation) selection as declared by the caller.
///
/// Any combination is representable; [`Route::resolve`] decides whether it
/// is one the API actually supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceOperation {
    pub resource: Resource,
    pub operation: Operation,
}

impl ResourceOperation {
    pub fn new(resource: Resource, operation: Operation) -> Self {
        Self { resource, operation }
    }

    /// Parse a selection from wire names.
    ///
    /// Unknown names are reported as [`TootError::UnsupportedOperation`].
    pub fn parse(resource: &str, operation: &str) -> Result<Self> {
        let unsupported = || TootError::unsupported(resource, operation);
        let resource: Resource = resource.parse().map_err(|_| unsupported())?;
        let operation: Operation = operation.parse().map_err(|_| unsupported())?;
        Ok(Self { resource, operation })
    }

    /// Selection using the resource's default operation.
    pub fn with_default_operation(resource: Resource) -> Self {
        Self { resource, operation: resource.default_operation() }
    }
}

impl std::fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.resource, self.operation)
    }
}

/// Closed set of supported (resource, operation) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    StatusPost,
    AccountGetFollowers,
    AccountBlock,
    AccountUnblock,
    NotificationGetAll,
}

impl Route {
    pub const ALL: &'static [Route] = &[
        Self::StatusPost,
        Self::AccountGetFollowers,
        Self::AccountBlock,
        Self::AccountUnblock,
        Self::NotificationGetAll,
    ];

    /// Look a selection up in the routing table.
    ///
    /// # Errors
    /// Returns [`TootError::UnsupportedOperation`] for pairs outside the table,
    /// e.g. `status/block`.
    pub fn resolve(selection: &ResourceOperation) -> Result<Self> {
        match (selection.resource, selection.operation) {
            (Resource::Status, Operation::Post) => Ok(Self::StatusPost),
            (Resource::Account, Operation::GetFollowers) => Ok(Self::AccountGetFollowers),
            (Resource::Account, Operation::Block) => Ok(Self::AccountBlock),
            (Resource::Account, Operation::Unblock) => Ok(Self::AccountUnblock),
            (Resource::Notification, Operation::GetAll) => Ok(Self::NotificationGetAll),
            (resource, operation) => {
                Err(TootError::unsupported(resource.as_str(), operation.as_str()))
            }
        }
    }

    pub fn selection(&self) -> ResourceOperation {
        match self {
            Self::StatusPost => ResourceOperation::new(Resource::Status, Operation::Post),
            Self::AccountGetFollowers => {
                ResourceOperation::new(Resource::Account, Operation::GetFollowers)
            }
            Self::AccountBlock => ResourceOperation::new(Resource::Account, Operation::Block),
            Self::AccountUnblock => ResourceOperation::new(Resource::Account, Operation::Unblock),
            Self::NotificationGetAll => {
                ResourceOperation::new(Resource::Notification, Operation::GetAll)
            }
        }
    }

    /// Human-readable action label.
    pub fn action(&self) -> &'static str {
        match self {
            Self::StatusPost => "Post a status",
            Self::AccountGetFollowers => "Get account followers",
            Self::AccountBlock => "Block an account",
            Self::AccountUnblock => "Unblock an account",
            Self::NotificationGetAll => "Get all notifications",
        }
    }
}

/// Who can see a posted status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to everyone
    #[default]
    Public,
    /// Visible to public, but not on public timelines
    Unlisted,
    /// Visible to followers only
    Private,
    /// Visible to mentioned users only
    Direct,
}

impl_wire_name_conversions!(Visibility {
    Public => "public",
    Unlisted => "unlisted",
    Private => "private",
    Direct => "direct",
});

/// Notification type tags accepted by `exclude_types[]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Follow,
    Favourite,
    Reblog,
    Mention,
    Poll,
}

impl_wire_name_conversions!(NotificationType {
    Follow => "follow",
    Favourite => "favourite",
    Reblog => "reblog",
    Mention => "mention",
    Poll => "poll",
});
