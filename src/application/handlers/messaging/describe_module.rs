//! DescribeModuleHandler - Tells the orchestrator how to call this service.

use crate::config::ServiceConfig;
use crate::domain::module::ModuleDefinition;

/// Handler for describe-module. Stateless; the definition is built once.
pub struct DescribeModuleHandler {
    definition: ModuleDefinition,
}

impl DescribeModuleHandler {
    pub fn new(service: &ServiceConfig) -> Self {
        Self {
            definition: ModuleDefinition::messaging(&service.id, &service.version),
        }
    }

    pub fn handle(&self) -> ModuleDefinition {
        self.definition.clone()
    }
}
