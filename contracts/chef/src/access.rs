use soroban_sdk::{Address, Env};

use crate::error::ChefError;
use crate::storage;
use crate::types::{ChefConfig, Role};

/// The owner holds every role; other accounts only the roles granted to them.
pub fn is_authorized(env: &Env, config: &ChefConfig, caller: &Address, role: &Role) -> bool {
    if *caller == config.owner {
        return true;
    }
    match role {
        Role::Owner => false,
        _ => storage::has_role(env, role, caller),
    }
}

pub fn require_role(
    env: &Env,
    config: &ChefConfig,
    caller: &Address,
    role: Role,
) -> Result<(), ChefError> {
    caller.require_auth();
    if !is_authorized(env, config, caller, &role) {
        return Err(ChefError::Unauthorized);
    }
    Ok(())
}
