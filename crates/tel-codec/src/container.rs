//! Container codec: ordered composition of named, typed fields.
//!
//! A container's encoding is the concatenation of each field's encoding in
//! **declared order**. Field names never reach the wire; only the schema
//! held by both ends maps positions back to names. Declared order is part
//! of the type's identity — reordering, adding, or removing a field
//! changes the byte layout and every content address derived from it, and
//! must be treated as an explicit schema version bump.

/// Define a container type and derive its [`Codec`](crate::Codec) impl.
///
/// Fields encode and decode in the order written here. The container is
/// fixed-size exactly when every field is.
///
/// ```
/// tel_codec::container! {
///     /// A participant record.
///     pub struct Participant {
///         pub id: u32,
///         pub name: String,
///         pub active: bool,
///     }
/// }
///
/// use tel_codec::Codec;
/// let p = Participant { id: 7, name: "alice".into(), active: true };
/// let bytes = p.encode();
/// assert_eq!(Participant::decode(&bytes).unwrap(), p);
/// ```
#[macro_export]
macro_rules! container {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        $vis struct $name {
            $( $(#[$field_meta])* $field_vis $field: $ty, )+
        }

        impl $crate::Codec for $name {
            const KIND: $crate::TypeKind = $crate::TypeKind::Container;

            const FIXED_SIZE: ::core::option::Option<usize> = {
                let mut sum = 0usize;
                let mut fixed = true;
                $(
                    match <$ty as $crate::Codec>::FIXED_SIZE {
                        ::core::option::Option::Some(size) => sum += size,
                        ::core::option::Option::None => fixed = false,
                    }
                )+
                if fixed {
                    ::core::option::Option::Some(sum)
                } else {
                    ::core::option::Option::None
                }
            };

            fn encode_into(&self, buf: &mut ::std::vec::Vec<u8>) {
                $( $crate::Codec::encode_into(&self.$field, buf); )+
            }

            fn decode_at(
                bytes: &[u8],
                offset: usize,
            ) -> $crate::CodecResult<(Self, usize)> {
                let mut offset = offset;
                $(
                    let ($field, next) = <$ty as $crate::Codec>::decode_at(bytes, offset)?;
                    offset = next;
                )+
                ::core::result::Result::Ok((Self { $($field),+ }, offset))
            }
        }
    };
}
