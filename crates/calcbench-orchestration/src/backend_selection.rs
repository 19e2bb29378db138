//! Backend selection logic.

use std::sync::Arc;

use calcbench_core::backend::{Backend, CalcError};
use calcbench_core::registry::BackendFactory;

/// Get backends to run based on the selection string.
///
/// `"all"` selects every registered backend in registry order.
pub fn get_backends_to_run(
    selection: &str,
    factory: &dyn BackendFactory,
) -> Result<Vec<Arc<dyn Backend>>, CalcError> {
    match selection {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcbench_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let backends = get_backends_to_run("all", &factory).unwrap();
        assert_eq!(backends.len(), 2);
        assert_eq!(backends[0].name(), "Accelerated");
        assert_eq!(backends[1].name(), "Scripted");
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let backends = get_backends_to_run("scripted", &factory).unwrap();
        assert_eq!(backends.len(), 1);
        assert_eq!(backends[0].name(), "Scripted");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let result = get_backends_to_run("unknown", &factory);
        assert!(result.is_err());
    }
}
