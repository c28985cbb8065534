//! # Layer 3: Formatting
//!
//! Human-readable rendering of maps for diagnostics and test assertions,
//! built entirely on the visitor primitive. Not a serialization format.
//!
//! Two surfaces:
//!
//! - [`Pretty`] (from `map.display()`): every value through its own
//!   `Display`, quoted. `{}` renders one line, `{:#}` one pair per line.
//! - `Debug` for the map types themselves: values through `Debug`,
//!   honoring `{:#?}`.
//!
//! A slot type without the required text conversion fails to compile,
//! consistent with the rest of the container.

use core::fmt::{self, Write};

use crate::map::{Cons, Nil, TagMap, Traverse, Visit};
use crate::tag::Tag;
use crate::tagged::Tagged;

/// Pass-through writer that escapes `"` and `\`, so rendered values can be
/// wrapped in quotes unambiguously.
pub(crate) struct Escaped<'a, W: ?Sized>(pub(crate) &'a mut W);

impl<W: Write + ?Sized> Write for Escaped<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.write_char(c)?;
        }
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        if c == '"' || c == '\\' {
            self.0.write_char('\\')?;
        }
        self.0.write_char(c)
    }
}

/// Display adapter for a tag map; obtained from `map.display()`.
///
/// ```
/// use tagmap::tag_map;
///
/// let person = tag_map! { "name" => "Alice", "age" => 30 };
/// assert_eq!(
///     format!("{}", person.display()),
///     r#"{ "name": "Alice", "age": "30" }"#,
/// );
/// ```
pub struct Pretty<'a, M>(&'a M);

impl<'a, M> Pretty<'a, M> {
    pub fn new(map: &'a M) -> Self {
        Pretty(map)
    }
}

impl Nil {
    /// Human-readable rendering; see [`Pretty`].
    pub fn display(&self) -> Pretty<'_, Nil> {
        Pretty::new(self)
    }
}

impl<T: Tag, V, R: TagMap> Cons<T, V, R> {
    /// Human-readable rendering; see [`Pretty`].
    pub fn display(&self) -> Pretty<'_, Self> {
        Pretty::new(self)
    }
}

/// Visitor behind [`Pretty`]; public only so the `Display` bound below is
/// nameable in downstream generic code.
pub struct Renderer<'a> {
    out: &'a mut dyn Write,
    sep: &'static str,
    first: bool,
    result: fmt::Result,
}

impl<T: Tag, V: fmt::Display> Visit<T, V> for Renderer<'_> {
    fn visit(&mut self, entry: &Tagged<T, V>) {
        if self.result.is_err() {
            return;
        }
        self.result = (|| {
            if !self.first {
                self.out.write_str(self.sep)?;
            }
            self.first = false;
            write!(self.out, "{:?}: \"", entry.tag_name())?;
            write!(Escaped(&mut *self.out), "{}", entry.value())?;
            self.out.write_str("\"")
        })();
    }
}

impl<M> fmt::Display for Pretty<'_, M>
where
    M: TagMap + for<'w> Traverse<Renderer<'w>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if M::LEN == 0 {
            return f.write_str("{}");
        }
        let (open, sep, close) = if f.alternate() {
            ("{\n    ", ",\n    ", "\n}")
        } else {
            ("{ ", ", ", " }")
        };
        f.write_str(open)?;
        let result = {
            let mut renderer = Renderer {
                out: &mut *f,
                sep,
                first: true,
                result: Ok(()),
            };
            self.0.traverse(&mut renderer);
            renderer.result
        };
        result?;
        f.write_str(close)
    }
}

/// Visitor behind the map `Debug` impls.
pub struct DebugRenderer<'a> {
    out: &'a mut dyn Write,
    sep: &'static str,
    first: bool,
    result: fmt::Result,
}

impl<T: Tag, V: fmt::Debug> Visit<T, V> for DebugRenderer<'_> {
    fn visit(&mut self, entry: &Tagged<T, V>) {
        if self.result.is_err() {
            return;
        }
        self.result = (|| {
            if !self.first {
                self.out.write_str(self.sep)?;
            }
            self.first = false;
            write!(self.out, "{:?}", entry)
        })();
    }
}

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{}")
    }
}

impl<T: Tag, V, R> fmt::Debug for Cons<T, V, R>
where
    Self: TagMap + for<'w> Traverse<DebugRenderer<'w>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, sep, close) = if f.alternate() {
            ("{\n    ", ",\n    ", "\n}")
        } else {
            ("{ ", ", ", " }")
        };
        f.write_str(open)?;
        let result = {
            let mut renderer = DebugRenderer {
                out: &mut *f,
                sep,
                first: true,
                result: Ok(()),
            };
            self.traverse(&mut renderer);
            renderer.result
        };
        result?;
        f.write_str(close)
    }
}
