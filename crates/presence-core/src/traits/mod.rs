//! Collaborator traits (ports)

mod collaborators;

pub use collaborators::{
    AutoResponder, CustomStatusStore, FeatureGate, RegistryResult, StatusRegistry,
};
