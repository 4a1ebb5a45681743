/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// Object keys keep the order they are written in. Anything that is not a
/// literal `null`/`true`/`false`, array or object is converted with
/// [`to_value`](crate::to_value). The macro cannot return an error, so a value
/// whose `Serialize` impl fails becomes `Null`; call `to_value` directly when
/// that failure has to be seen.
/// Negative numbers inside arrays and objects need parentheses: `(-1)`.
///
/// ```rust
/// use toon_codec::{encode, toon};
///
/// let users = toon!({
///     "users": [
///         {"id": 1, "name": "Alice"},
///         {"id": 2, "name": "Bob"}
///     ]
/// });
/// assert_eq!(encode(&users), "users: [2]{id,name}:\n  1,Alice\n  2,Bob");
/// ```
#[macro_export]
macro_rules! toon {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::toon!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression goes through serde.
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
