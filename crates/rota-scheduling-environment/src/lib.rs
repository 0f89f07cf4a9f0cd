pub mod calendar;
pub mod duty;
pub mod member;

use std::fmt;
use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

use self::member::Member;

#[derive(Eq, PartialEq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct StableId(pub String);

impl StableId {
    pub fn new(stable_id: impl Into<String>) -> Self {
        StableId(stable_id.into())
    }
}

impl Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Eq, PartialEq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct OrganizationId(pub String);

impl OrganizationId {
    pub fn new(organization_id: impl Into<String>) -> Self {
        OrganizationId(organization_id.into())
    }
}

impl Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The roster handed to the assignment engine. The list is already filtered
/// down to organizationally eligible members; nothing past this point
/// performs authorization.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RosterEnvironment {
    pub members: Vec<Member>,
}

impl RosterEnvironment {
    pub fn builder() -> RosterEnvironmentBuilder {
        RosterEnvironmentBuilder {
            members: Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct RosterEnvironmentBuilder {
    members: Vec<Member>,
}

impl RosterEnvironmentBuilder {
    pub fn build(self) -> RosterEnvironment {
        RosterEnvironment {
            members: self.members,
        }
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }
}
