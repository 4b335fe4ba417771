use std::sync::Arc;

use rengine_rexp::{Engine, EngineError, EngineId, EngineRef, Error};

struct Connection {
    id: u64,
    host: String,
}

impl Engine for Connection {
    fn id(&self) -> EngineId {
        EngineId(self.id)
    }

    fn description(&self) -> String {
        format!("Rserve at {}", self.host)
    }
}

fn eval(engine: &Arc<Connection>, expr: &str) -> Result<(), Error> {
    Err(EngineError::new(EngineRef::new(engine), format!("eval failed: {}", expr)).into())
}

#[test]
fn test_error_exposes_message_and_engine() {
    let engine = Arc::new(Connection {
        id: 42,
        host: "localhost:6311".into(),
    });

    let err = eval(&engine, "stop('boom')").unwrap_err();
    let Error::Engine(engine_err) = err else {
        panic!("expected engine error");
    };

    assert_eq!(engine_err.message(), "eval failed: stop('boom')");
    assert_eq!(engine_err.engine().id(), EngineId(42));

    let origin = engine_err.engine().upgrade().expect("engine still alive");
    assert_eq!(origin.description(), "Rserve at localhost:6311");
}

#[test]
fn test_error_outlives_engine() {
    let engine = Arc::new(Connection {
        id: 1,
        host: "example".into(),
    });
    let err = EngineError::new(EngineRef::new(&engine), "connection reset");
    assert_eq!(Arc::strong_count(&engine), 1);

    drop(engine);
    assert!(err.engine().upgrade().is_none());
    assert_eq!(err.to_string(), "connection reset (engine#1)");
}

#[test]
fn test_from_dyn_handle() {
    let engine: Arc<dyn Engine> = Arc::new(Connection {
        id: 9,
        host: "h".into(),
    });
    let handle = EngineRef::from_dyn(&engine);
    assert!(handle.is_alive());
    assert_eq!(handle.id(), EngineId(9));
}
