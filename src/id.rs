use nanoid::nanoid;

/// Canonical alphabet for plateful entity identifiers (no ambiguous glyphs).
const ENTITY_ID_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y',
    'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
/// Default entity id length.
const ENTITY_ID_LENGTH: usize = 20;

/// Invite codes use the full 62-character alphanumeric alphabet.
const INVITE_CODE_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't',
    'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];
/// Invite codes are short enough to read over the phone.
pub const INVITE_CODE_LENGTH: usize = 6;

/// Generates a new entity identifier using the configured alphabet and length.
pub fn generate_entity_id() -> String {
    nanoid!(ENTITY_ID_LENGTH, ENTITY_ID_ALPHABET)
}

/// Generates a 6-character invite code, uniformly over the alphanumeric alphabet.
///
/// Uniqueness is not guaranteed here; callers assigning a code to a user must
/// check for collisions against existing codes (see
/// [`crate::social::unique_invite_code`]).
pub fn generate_invite_code() -> String {
    nanoid!(INVITE_CODE_LENGTH, INVITE_CODE_ALPHABET)
}

/// Returns `true` if every character of `code` belongs to the invite alphabet.
pub fn is_invite_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
