//! Dependency registry
//!
//! A small service locator used once, at startup, to wire concrete
//! implementations into the application root. Services are keyed by
//! `TypeId`, so a lookup is written `registry.get::<TemplateStore>()`
//! and checked at compile time rather than through name strings.
//!
//! The registry is owned by the application root and passed explicitly;
//! there is no process-wide instance. The application is single-threaded,
//! so entries are shared as `Rc` with no locking.

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("service not registered: {0}")]
    NotRegistered(&'static str),
}

type Service = Rc<dyn Any>;
type Factory = Box<dyn Fn() -> Service>;

struct FactoryEntry {
    build: Factory,
    singleton: bool,
}

/// Name-free service locator with instance, factory and singleton slots.
#[derive(Default)]
pub struct Registry {
    instances: RefCell<HashMap<TypeId, Service>>,
    factories: RefCell<HashMap<TypeId, FactoryEntry>>,
    singletons: RefCell<HashMap<TypeId, Service>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already-built instance. Lookups always return this
    /// same instance, so instance registrations are singletons by nature.
    pub fn register_instance<T: 'static>(&self, instance: T) {
        let id = TypeId::of::<T>();
        self.instances
            .borrow_mut()
            .insert(id, Rc::new(instance) as Service);
        // A re-registration invalidates whatever an earlier factory cached
        self.singletons.borrow_mut().remove(&id);
    }

    /// Register a factory. With `singleton` the first `get` materializes
    /// the instance and every later `get` returns the same one; without
    /// it every `get` builds afresh.
    pub fn register_factory<T: 'static>(&self, singleton: bool, build: impl Fn() -> T + 'static) {
        let id = TypeId::of::<T>();
        self.factories.borrow_mut().insert(
            id,
            FactoryEntry {
                build: Box::new(move || Rc::new(build()) as Service),
                singleton,
            },
        );
        self.singletons.borrow_mut().remove(&id);
    }

    /// Register a type constructible via `Default`, as a singleton.
    pub fn register_default<T: Default + 'static>(&self) {
        self.register_factory(true, T::default);
    }

    /// Resolve a service. Resolution order: cached singleton, stored
    /// instance, factory (cached when singleton semantics were asked
    /// for). Fails naming the requested type when nothing matches.
    pub fn get<T: 'static>(&self) -> Result<Rc<T>, RegistryError> {
        let id = TypeId::of::<T>();

        if let Some(service) = self.singletons.borrow().get(&id) {
            return downcast::<T>(service.clone());
        }

        if let Some(service) = self.instances.borrow().get(&id) {
            return downcast::<T>(service.clone());
        }

        let built = {
            let factories = self.factories.borrow();
            match factories.get(&id) {
                Some(entry) => {
                    let service = (entry.build)();
                    if entry.singleton {
                        self.singletons.borrow_mut().insert(id, service.clone());
                    }
                    service
                }
                None => return Err(RegistryError::NotRegistered(type_name::<T>())),
            }
        };

        downcast::<T>(built)
    }

    pub fn has<T: 'static>(&self) -> bool {
        let id = TypeId::of::<T>();
        self.singletons.borrow().contains_key(&id)
            || self.instances.borrow().contains_key(&id)
            || self.factories.borrow().contains_key(&id)
    }

    /// Drop every instance, factory and cached singleton, returning the
    /// registry to its initial empty state.
    pub fn clear(&self) {
        self.instances.borrow_mut().clear();
        self.factories.borrow_mut().clear();
        self.singletons.borrow_mut().clear();
    }
}

fn downcast<T: 'static>(service: Service) -> Result<Rc<T>, RegistryError> {
    service
        .downcast::<T>()
        .map_err(|_| RegistryError::NotRegistered(type_name::<T>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Debug)]
    struct Greeter {
        greeting: String,
    }

    struct Counterish {
        n: u32,
    }

    #[test]
    fn test_instance_registration_returns_same_instance() {
        let registry = Registry::new();
        registry.register_instance(Greeter {
            greeting: "hello".to_string(),
        });

        let a = registry.get::<Greeter>().unwrap();
        let b = registry.get::<Greeter>().unwrap();
        assert_eq!(a.greeting, "hello");
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_singleton_factory_materializes_once() {
        let registry = Registry::new();
        registry.register_factory(true, || Counterish { n: 7 });

        let a = registry.get::<Counterish>().unwrap();
        let b = registry.get::<Counterish>().unwrap();
        assert_eq!(a.n, 7);
        assert!(Rc::ptr_eq(&a, &b), "singleton must be materialized at most once");
    }

    #[test]
    fn test_transient_factory_builds_fresh_instances() {
        let registry = Registry::new();
        registry.register_factory(false, || Counterish { n: 1 });

        let a = registry.get::<Counterish>().unwrap();
        let b = registry.get::<Counterish>().unwrap();
        assert!(!Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_register_default() {
        let registry = Registry::new();
        registry.register_default::<Greeter>();
        let g = registry.get::<Greeter>().unwrap();
        assert!(g.greeting.is_empty());
    }

    #[test]
    fn test_get_unregistered_fails_naming_type() {
        let registry = Registry::new();
        let err = registry.get::<Greeter>().unwrap_err();
        match err {
            RegistryError::NotRegistered(name) => assert!(name.contains("Greeter")),
        }
    }

    #[test]
    fn test_has() {
        let registry = Registry::new();
        assert!(!registry.has::<Greeter>());
        registry.register_default::<Greeter>();
        assert!(registry.has::<Greeter>());
    }

    #[test]
    fn test_clear_returns_to_empty_state() {
        let registry = Registry::new();
        registry.register_instance(Counterish { n: 3 });
        registry.register_default::<Greeter>();
        let _ = registry.get::<Greeter>().unwrap(); // populate the singleton cache

        registry.clear();
        assert!(!registry.has::<Counterish>());
        assert!(!registry.has::<Greeter>());
        assert!(registry.get::<Counterish>().is_err());
        assert!(registry.get::<Greeter>().is_err());
    }

    #[test]
    fn test_reregistering_instance_replaces_cached_singleton() {
        let registry = Registry::new();
        registry.register_factory(true, || Counterish { n: 1 });
        let first = registry.get::<Counterish>().unwrap();
        assert_eq!(first.n, 1);

        registry.register_instance(Counterish { n: 2 });
        let second = registry.get::<Counterish>().unwrap();
        assert_eq!(second.n, 2);
    }
}
