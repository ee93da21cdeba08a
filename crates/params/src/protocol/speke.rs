//! Constants for EC-SPEKE over P-256

/// Domain-separation input hashed by EC-REDP-1 to obtain Q1
///
/// The terminating NUL is part of the hashed input.
pub const SPEKE_REDP1_INPUT_Q1: &[u8] = b"ALLJOYN-ECSPEKE-1\0";

/// Domain-separation input hashed by EC-REDP-1 to obtain Q2
pub const SPEKE_REDP1_INPUT_Q2: &[u8] = b"ALLJOYN-ECSPEKE-2\0";

/// x coordinate of Q1 = EC-REDP-1("ALLJOYN-ECSPEKE-1"), big-endian
pub const SPEKE_Q1_X: [u8; 32] = [
    0xE7, 0xF4, 0x25, 0xD4, 0xC2, 0x7D, 0x2B, 0xA1,
    0x0A, 0xF6, 0x30, 0x11, 0x5A, 0xA7, 0x34, 0xC0,
    0xDC, 0xD4, 0x85, 0x33, 0x7A, 0x6C, 0x10, 0x35,
    0x9F, 0x01, 0x1E, 0xB0, 0xE9, 0x27, 0xBB, 0xB7,
];

/// y coordinate of Q1, big-endian
pub const SPEKE_Q1_Y: [u8; 32] = [
    0x8B, 0x4A, 0xDF, 0x4E, 0xBD, 0x69, 0x05, 0x98,
    0x41, 0x15, 0xDB, 0x75, 0xD3, 0x52, 0x08, 0xF6,
    0x8A, 0x4A, 0xE2, 0x30, 0xF7, 0xC5, 0x0D, 0x50,
    0xDD, 0x83, 0x6A, 0x9D, 0xF0, 0x70, 0x2B, 0x55,
];

/// x coordinate of Q2 = EC-REDP-1("ALLJOYN-ECSPEKE-2"), big-endian
pub const SPEKE_Q2_X: [u8; 32] = [
    0xF9, 0xF2, 0xEF, 0x39, 0x4F, 0xCB, 0x37, 0x5E,
    0xE4, 0xE3, 0x6B, 0xBB, 0x81, 0xCD, 0x84, 0x3D,
    0x96, 0x6C, 0x29, 0x3C, 0xD3, 0x63, 0x44, 0x62,
    0x4C, 0xEC, 0x1D, 0x03, 0x49, 0x72, 0x17, 0xAA,
];

/// y coordinate of Q2, big-endian
pub const SPEKE_Q2_Y: [u8; 32] = [
    0xF5, 0xEF, 0xE6, 0xB5, 0x3F, 0xF3, 0x41, 0x02,
    0x77, 0x99, 0x9C, 0x42, 0xD8, 0xDD, 0xAB, 0x41,
    0x5E, 0xAA, 0xF4, 0x9A, 0x32, 0xB5, 0x8C, 0xFA,
    0x40, 0xD6, 0xAC, 0xB2, 0x27, 0x4C, 0xCF, 0xC2,
];
