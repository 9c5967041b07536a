/*!
Serialization support for the stack container.

A stack is written as a sequence of its live elements, bottom first. It is
only built when the `serde-support` feature is enabled.
*/

use std::fmt;
use std::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use ::serde::ser::{self, Serialize, Serializer};

use crate::core::error::Operation;
use crate::core::stack::Stack;

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let live = self
            .try_live(Operation::Serialize)
            .map_err(<S::Error as ser::Error>::custom)?;
        serializer.collect_seq(live)
    }
}

struct StackVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a non-empty sequence of stack elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }

        Stack::try_from_vec(elements).map_err(de::Error::custom)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(StackVisitor { marker: PhantomData })
    }
}
