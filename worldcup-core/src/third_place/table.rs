//! Slot assignments for every possible set of 8 qualifying third-placed groups.
//!
//! Columns follow [`THIRD_PLACE_SLOTS`]: matches 74, 77, 79, 80, 81, 82, 85 and 87.
//!
//! [`THIRD_PLACE_SLOTS`]: super::THIRD_PLACE_SLOTS
use crate::GroupLetter::{self, *};

#[rustfmt::skip]
pub(super) static TABLE: [[GroupLetter; 8]; 495] = [
    [A, C, F, E, B, H, G, D], // ABCDEFGH
    [A, C, F, E, B, I, G, D], // ABCDEFGI
    [A, C, F, E, B, J, G, D], // ABCDEFGJ
    [A, C, F, K, B, E, G, D], // ABCDEFGK
    [B, D, C, E, F, A, G, L], // ABCDEFGL
    [A, C, E, H, B, I, F, D], // ABCDEFHI
    [A, C, E, H, B, J, F, D], // ABCDEFHJ
    [A, C, E, K, B, H, F, D], // ABCDEFHK
    [A, D, C, E, B, H, F, L], // ABCDEFHL
    [A, C, E, I, B, J, F, D], // ABCDEFIJ
    [A, C, E, K, B, I, F, D], // ABCDEFIK
    [A, D, C, E, B, I, F, L], // ABCDEFIL
    [A, C, E, K, B, J, F, D], // ABCDEFJK
    [A, D, C, E, B, J, F, L], // ABCDEFJL
    [A, D, C, K, B, E, F, L], // ABCDEFKL
    [A, C, E, H, B, I, G, D], // ABCDEGHI
    [A, C, E, H, B, J, G, D], // ABCDEGHJ
    [A, C, E, K, B, H, G, D], // ABCDEGHK
    [A, D, C, E, B, H, G, L], // ABCDEGHL
    [A, C, E, I, B, J, G, D], // ABCDEGIJ
    [A, C, E, K, B, I, G, D], // ABCDEGIK
    [A, D, C, E, B, I, G, L], // ABCDEGIL
    [A, C, E, K, B, J, G, D], // ABCDEGJK
    [A, D, C, E, B, J, G, L], // ABCDEGJL
    [A, D, C, K, B, E, G, L], // ABCDEGKL
    [A, C, E, H, B, I, J, D], // ABCDEHIJ
    [A, C, E, K, B, H, I, D], // ABCDEHIK
    [A, D, C, E, B, H, I, L], // ABCDEHIL
    [A, C, E, K, B, H, J, D], // ABCDEHJK
    [A, D, C, E, B, H, J, L], // ABCDEHJL
    [A, D, C, K, B, H, E, L], // ABCDEHKL
    [A, C, E, K, B, I, J, D], // ABCDEIJK
    [A, D, C, E, B, I, J, L], // ABCDEIJL
    [A, D, C, K, B, E, I, L], // ABCDEIKL
    [A, D, C, K, B, E, J, L], // ABCDEJKL
    [A, C, F, H, B, I, G, D], // ABCDFGHI
    [A, C, F, H, B, J, G, D], // ABCDFGHJ
    [A, C, F, K, B, H, G, D], // ABCDFGHK
    [B, D, C, H, F, A, G, L], // ABCDFGHL
    [A, C, F, I, B, J, G, D], // ABCDFGIJ
    [A, C, F, K, B, I, G, D], // ABCDFGIK
    [B, D, C, I, F, A, G, L], // ABCDFGIL
    [A, C, F, K, B, J, G, D], // ABCDFGJK
    [B, D, C, J, F, A, G, L], // ABCDFGJL
    [B, D, C, K, F, A, G, L], // ABCDFGKL
    [A, C, F, H, B, I, J, D], // ABCDFHIJ
    [A, C, F, K, B, H, I, D], // ABCDFHIK
    [A, D, C, H, B, I, F, L], // ABCDFHIL
    [A, C, F, K, B, H, J, D], // ABCDFHJK
    [A, D, C, H, B, J, F, L], // ABCDFHJL
    [A, D, C, K, B, H, F, L], // ABCDFHKL
    [A, C, F, K, B, I, J, D], // ABCDFIJK
    [A, D, C, I, B, J, F, L], // ABCDFIJL
    [A, D, C, K, B, I, F, L], // ABCDFIKL
    [A, D, C, K, B, J, F, L], // ABCDFJKL
    [A, C, H, I, B, J, G, D], // ABCDGHIJ
    [A, C, H, K, B, I, G, D], // ABCDGHIK
    [A, D, C, H, B, I, G, L], // ABCDGHIL
    [A, C, H, K, B, J, G, D], // ABCDGHJK
    [A, D, C, H, B, J, G, L], // ABCDGHJL
    [A, D, C, K, B, H, G, L], // ABCDGHKL
    [A, C, I, K, B, J, G, D], // ABCDGIJK
    [A, D, C, I, B, J, G, L], // ABCDGIJL
    [A, D, C, K, B, I, G, L], // ABCDGIKL
    [A, D, C, K, B, J, G, L], // ABCDGJKL
    [A, C, H, K, B, I, J, D], // ABCDHIJK
    [A, D, C, H, B, I, J, L], // ABCDHIJL
    [A, D, C, K, B, H, I, L], // ABCDHIKL
    [A, D, C, K, B, H, J, L], // ABCDHJKL
    [A, D, C, K, B, I, J, L], // ABCDIJKL
    [A, C, F, E, B, H, G, I], // ABCEFGHI
    [A, C, F, E, B, H, G, J], // ABCEFGHJ
    [A, C, F, K, B, H, G, E], // ABCEFGHK
    [A, C, F, E, B, H, G, L], // ABCEFGHL
    [A, C, F, E, B, I, G, J], // ABCEFGIJ
    [A, C, F, K, B, E, G, I], // ABCEFGIK
    [A, C, F, E, B, I, G, L], // ABCEFGIL
    [A, C, F, K, B, E, G, J], // ABCEFGJK
    [A, C, F, E, B, J, G, L], // ABCEFGJL
    [A, C, F, K, B, E, G, L], // ABCEFGKL
    [A, C, E, H, B, I, F, J], // ABCEFHIJ
    [A, C, E, K, B, H, F, I], // ABCEFHIK
    [A, C, E, H, B, I, F, L], // ABCEFHIL
    [A, C, E, K, B, H, F, J], // ABCEFHJK
    [A, C, E, H, B, J, F, L], // ABCEFHJL
    [A, C, E, K, B, H, F, L], // ABCEFHKL
    [A, C, E, K, B, I, F, J], // ABCEFIJK
    [A, C, E, I, B, J, F, L], // ABCEFIJL
    [A, C, E, K, B, I, F, L], // ABCEFIKL
    [A, C, E, K, B, J, F, L], // ABCEFJKL
    [A, C, E, H, B, I, G, J], // ABCEGHIJ
    [A, C, E, K, B, H, G, I], // ABCEGHIK
    [A, C, E, H, B, I, G, L], // ABCEGHIL
    [A, C, E, K, B, H, G, J], // ABCEGHJK
    [A, C, E, H, B, J, G, L], // ABCEGHJL
    [A, C, E, K, B, H, G, L], // ABCEGHKL
    [A, C, E, K, B, I, G, J], // ABCEGIJK
    [A, C, E, I, B, J, G, L], // ABCEGIJL
    [A, C, E, K, B, I, G, L], // ABCEGIKL
    [A, C, E, K, B, J, G, L], // ABCEGJKL
    [A, C, E, K, B, H, I, J], // ABCEHIJK
    [A, C, E, H, B, I, J, L], // ABCEHIJL
    [A, C, E, K, B, H, I, L], // ABCEHIKL
    [A, C, E, K, B, H, J, L], // ABCEHJKL
    [A, C, E, K, B, I, J, L], // ABCEIJKL
    [A, C, F, H, B, I, G, J], // ABCFGHIJ
    [A, C, F, K, B, H, G, I], // ABCFGHIK
    [A, C, F, H, B, I, G, L], // ABCFGHIL
    [A, C, F, K, B, H, G, J], // ABCFGHJK
    [A, C, F, H, B, J, G, L], // ABCFGHJL
    [A, C, F, K, B, H, G, L], // ABCFGHKL
    [A, C, F, K, B, I, G, J], // ABCFGIJK
    [A, C, F, I, B, J, G, L], // ABCFGIJL
    [A, C, F, K, B, I, G, L], // ABCFGIKL
    [A, C, F, K, B, J, G, L], // ABCFGJKL
    [A, C, F, K, B, H, I, J], // ABCFHIJK
    [A, C, F, H, B, I, J, L], // ABCFHIJL
    [A, C, F, K, B, H, I, L], // ABCFHIKL
    [A, C, F, K, B, H, J, L], // ABCFHJKL
    [A, C, F, K, B, I, J, L], // ABCFIJKL
    [A, C, H, K, B, I, G, J], // ABCGHIJK
    [A, C, H, I, B, J, G, L], // ABCGHIJL
    [A, C, H, K, B, I, G, L], // ABCGHIKL
    [A, C, H, K, B, J, G, L], // ABCGHJKL
    [A, C, I, K, B, J, G, L], // ABCGIJKL
    [A, C, H, K, B, I, J, L], // ABCHIJKL
    [A, D, F, E, B, H, G, I], // ABDEFGHI
    [A, D, F, E, B, H, G, J], // ABDEFGHJ
    [A, D, F, K, B, H, G, E], // ABDEFGHK
    [A, D, F, E, B, H, G, L], // ABDEFGHL
    [A, D, F, E, B, I, G, J], // ABDEFGIJ
    [A, D, F, K, B, E, G, I], // ABDEFGIK
    [A, D, F, E, B, I, G, L], // ABDEFGIL
    [A, D, F, K, B, E, G, J], // ABDEFGJK
    [A, D, F, E, B, J, G, L], // ABDEFGJL
    [A, D, F, K, B, E, G, L], // ABDEFGKL
    [A, D, E, H, B, I, F, J], // ABDEFHIJ
    [A, D, E, K, B, H, F, I], // ABDEFHIK
    [A, D, E, H, B, I, F, L], // ABDEFHIL
    [A, D, E, K, B, H, F, J], // ABDEFHJK
    [A, D, E, H, B, J, F, L], // ABDEFHJL
    [A, D, E, K, B, H, F, L], // ABDEFHKL
    [A, D, E, K, B, I, F, J], // ABDEFIJK
    [A, D, E, I, B, J, F, L], // ABDEFIJL
    [A, D, E, K, B, I, F, L], // ABDEFIKL
    [A, D, E, K, B, J, F, L], // ABDEFJKL
    [A, D, E, H, B, I, G, J], // ABDEGHIJ
    [A, D, E, K, B, H, G, I], // ABDEGHIK
    [A, D, E, H, B, I, G, L], // ABDEGHIL
    [A, D, E, K, B, H, G, J], // ABDEGHJK
    [A, D, E, H, B, J, G, L], // ABDEGHJL
    [A, D, E, K, B, H, G, L], // ABDEGHKL
    [A, D, E, K, B, I, G, J], // ABDEGIJK
    [A, D, E, I, B, J, G, L], // ABDEGIJL
    [A, D, E, K, B, I, G, L], // ABDEGIKL
    [A, D, E, K, B, J, G, L], // ABDEGJKL
    [A, D, E, K, B, H, I, J], // ABDEHIJK
    [A, D, E, H, B, I, J, L], // ABDEHIJL
    [A, D, E, K, B, H, I, L], // ABDEHIKL
    [A, D, E, K, B, H, J, L], // ABDEHJKL
    [A, D, E, K, B, I, J, L], // ABDEIJKL
    [A, D, F, H, B, I, G, J], // ABDFGHIJ
    [A, D, F, K, B, H, G, I], // ABDFGHIK
    [A, D, F, H, B, I, G, L], // ABDFGHIL
    [A, D, F, K, B, H, G, J], // ABDFGHJK
    [A, D, F, H, B, J, G, L], // ABDFGHJL
    [A, D, F, K, B, H, G, L], // ABDFGHKL
    [A, D, F, K, B, I, G, J], // ABDFGIJK
    [A, D, F, I, B, J, G, L], // ABDFGIJL
    [A, D, F, K, B, I, G, L], // ABDFGIKL
    [A, D, F, K, B, J, G, L], // ABDFGJKL
    [A, D, F, K, B, H, I, J], // ABDFHIJK
    [A, D, F, H, B, I, J, L], // ABDFHIJL
    [A, D, F, K, B, H, I, L], // ABDFHIKL
    [A, D, F, K, B, H, J, L], // ABDFHJKL
    [A, D, F, K, B, I, J, L], // ABDFIJKL
    [A, D, H, K, B, I, G, J], // ABDGHIJK
    [A, D, H, I, B, J, G, L], // ABDGHIJL
    [A, D, H, K, B, I, G, L], // ABDGHIKL
    [A, D, H, K, B, J, G, L], // ABDGHJKL
    [A, D, I, K, B, J, G, L], // ABDGIJKL
    [A, D, H, K, B, I, J, L], // ABDHIJKL
    [A, F, E, H, B, I, G, J], // ABEFGHIJ
    [A, F, E, K, B, H, G, I], // ABEFGHIK
    [A, F, E, H, B, I, G, L], // ABEFGHIL
    [A, F, E, K, B, H, G, J], // ABEFGHJK
    [A, F, E, H, B, J, G, L], // ABEFGHJL
    [A, F, E, K, B, H, G, L], // ABEFGHKL
    [A, F, E, K, B, I, G, J], // ABEFGIJK
    [A, F, E, I, B, J, G, L], // ABEFGIJL
    [A, F, E, K, B, I, G, L], // ABEFGIKL
    [A, F, E, K, B, J, G, L], // ABEFGJKL
    [A, F, E, K, B, H, I, J], // ABEFHIJK
    [A, F, E, H, B, I, J, L], // ABEFHIJL
    [A, F, E, K, B, H, I, L], // ABEFHIKL
    [A, F, E, K, B, H, J, L], // ABEFHJKL
    [A, F, E, K, B, I, J, L], // ABEFIJKL
    [A, G, E, K, B, H, I, J], // ABEGHIJK
    [A, G, E, H, B, I, J, L], // ABEGHIJL
    [A, G, E, K, B, H, I, L], // ABEGHIKL
    [A, G, E, K, B, H, J, L], // ABEGHJKL
    [A, G, E, K, B, I, J, L], // ABEGIJKL
    [A, H, E, K, B, I, J, L], // ABEHIJKL
    [A, F, H, K, B, I, G, J], // ABFGHIJK
    [A, F, H, I, B, J, G, L], // ABFGHIJL
    [A, F, H, K, B, I, G, L], // ABFGHIKL
    [A, F, H, K, B, J, G, L], // ABFGHJKL
    [A, F, I, K, B, J, G, L], // ABFGIJKL
    [A, F, H, K, B, I, J, L], // ABFHIJKL
    [A, G, H, K, B, I, J, L], // ABGHIJKL
    [A, C, E, H, F, I, G, D], // ACDEFGHI
    [A, C, E, H, F, J, G, D], // ACDEFGHJ
    [A, C, E, K, F, H, G, D], // ACDEFGHK
    [A, D, C, E, F, H, G, L], // ACDEFGHL
    [A, C, E, I, F, J, G, D], // ACDEFGIJ
    [A, C, E, K, F, I, G, D], // ACDEFGIK
    [A, D, C, E, F, I, G, L], // ACDEFGIL
    [A, C, E, K, F, J, G, D], // ACDEFGJK
    [A, D, C, E, F, J, G, L], // ACDEFGJL
    [A, D, C, K, F, E, G, L], // ACDEFGKL
    [A, C, E, H, F, I, J, D], // ACDEFHIJ
    [A, C, E, K, F, H, I, D], // ACDEFHIK
    [A, D, C, E, F, H, I, L], // ACDEFHIL
    [A, C, E, K, F, H, J, D], // ACDEFHJK
    [A, D, C, E, F, H, J, L], // ACDEFHJL
    [A, D, C, K, E, H, F, L], // ACDEFHKL
    [A, C, E, K, F, I, J, D], // ACDEFIJK
    [A, D, C, E, F, I, J, L], // ACDEFIJL
    [A, D, C, K, E, I, F, L], // ACDEFIKL
    [A, D, C, K, E, J, F, L], // ACDEFJKL
    [A, C, E, H, I, J, G, D], // ACDEGHIJ
    [A, C, E, K, I, H, G, D], // ACDEGHIK
    [A, D, C, E, I, H, G, L], // ACDEGHIL
    [A, C, E, K, J, H, G, D], // ACDEGHJK
    [A, D, C, E, J, H, G, L], // ACDEGHJL
    [A, D, C, K, E, H, G, L], // ACDEGHKL
    [A, C, E, K, I, J, G, D], // ACDEGIJK
    [A, D, C, E, I, J, G, L], // ACDEGIJL
    [A, D, C, K, E, I, G, L], // ACDEGIKL
    [A, D, C, K, E, J, G, L], // ACDEGJKL
    [A, C, E, K, I, H, J, D], // ACDEHIJK
    [A, D, C, E, I, H, J, L], // ACDEHIJL
    [A, D, C, K, E, H, I, L], // ACDEHIKL
    [A, D, C, K, E, H, J, L], // ACDEHJKL
    [A, D, C, K, E, I, J, L], // ACDEIJKL
    [A, C, F, H, I, J, G, D], // ACDFGHIJ
    [A, C, F, K, I, H, G, D], // ACDFGHIK
    [A, D, C, H, F, I, G, L], // ACDFGHIL
    [A, C, F, K, J, H, G, D], // ACDFGHJK
    [A, D, C, H, F, J, G, L], // ACDFGHJL
    [A, D, C, K, F, H, G, L], // ACDFGHKL
    [A, C, F, K, I, J, G, D], // ACDFGIJK
    [A, D, C, I, F, J, G, L], // ACDFGIJL
    [A, D, C, K, F, I, G, L], // ACDFGIKL
    [A, D, C, K, F, J, G, L], // ACDFGJKL
    [A, C, F, K, I, H, J, D], // ACDFHIJK
    [A, D, C, H, F, I, J, L], // ACDFHIJL
    [A, D, C, K, F, H, I, L], // ACDFHIKL
    [A, D, C, K, F, H, J, L], // ACDFHJKL
    [A, D, C, K, F, I, J, L], // ACDFIJKL
    [A, C, H, K, I, J, G, D], // ACDGHIJK
    [A, D, C, H, I, J, G, L], // ACDGHIJL
    [A, D, C, K, I, H, G, L], // ACDGHIKL
    [A, D, C, K, J, H, G, L], // ACDGHJKL
    [A, D, C, K, I, J, G, L], // ACDGIJKL
    [A, D, C, K, I, H, J, L], // ACDHIJKL
    [A, C, E, H, F, I, G, J], // ACEFGHIJ
    [A, C, E, K, F, H, G, I], // ACEFGHIK
    [A, C, E, H, F, I, G, L], // ACEFGHIL
    [A, C, E, K, F, H, G, J], // ACEFGHJK
    [A, C, E, H, F, J, G, L], // ACEFGHJL
    [A, C, E, K, F, H, G, L], // ACEFGHKL
    [A, C, E, K, F, I, G, J], // ACEFGIJK
    [A, C, E, I, F, J, G, L], // ACEFGIJL
    [A, C, E, K, F, I, G, L], // ACEFGIKL
    [A, C, E, K, F, J, G, L], // ACEFGJKL
    [A, C, E, K, F, H, I, J], // ACEFHIJK
    [A, C, E, H, F, I, J, L], // ACEFHIJL
    [A, C, E, K, F, H, I, L], // ACEFHIKL
    [A, C, E, K, F, H, J, L], // ACEFHJKL
    [A, C, E, K, F, I, J, L], // ACEFIJKL
    [A, C, E, K, I, H, G, J], // ACEGHIJK
    [A, C, E, H, I, J, G, L], // ACEGHIJL
    [A, C, E, K, I, H, G, L], // ACEGHIKL
    [A, C, E, K, J, H, G, L], // ACEGHJKL
    [A, C, E, K, I, J, G, L], // ACEGIJKL
    [A, C, E, K, I, H, J, L], // ACEHIJKL
    [A, C, F, K, I, H, G, J], // ACFGHIJK
    [A, C, F, H, I, J, G, L], // ACFGHIJL
    [A, C, F, K, I, H, G, L], // ACFGHIKL
    [A, C, F, K, J, H, G, L], // ACFGHJKL
    [A, C, F, K, I, J, G, L], // ACFGIJKL
    [A, C, F, K, I, H, J, L], // ACFHIJKL
    [A, C, H, K, I, J, G, L], // ACGHIJKL
    [A, D, E, H, F, I, G, J], // ADEFGHIJ
    [A, D, E, K, F, H, G, I], // ADEFGHIK
    [A, D, E, H, F, I, G, L], // ADEFGHIL
    [A, D, E, K, F, H, G, J], // ADEFGHJK
    [A, D, E, H, F, J, G, L], // ADEFGHJL
    [A, D, E, K, F, H, G, L], // ADEFGHKL
    [A, D, E, K, F, I, G, J], // ADEFGIJK
    [A, D, E, I, F, J, G, L], // ADEFGIJL
    [A, D, E, K, F, I, G, L], // ADEFGIKL
    [A, D, E, K, F, J, G, L], // ADEFGJKL
    [A, D, E, K, F, H, I, J], // ADEFHIJK
    [A, D, E, H, F, I, J, L], // ADEFHIJL
    [A, D, E, K, F, H, I, L], // ADEFHIKL
    [A, D, E, K, F, H, J, L], // ADEFHJKL
    [A, D, E, K, F, I, J, L], // ADEFIJKL
    [A, D, E, K, I, H, G, J], // ADEGHIJK
    [A, D, E, H, I, J, G, L], // ADEGHIJL
    [A, D, E, K, I, H, G, L], // ADEGHIKL
    [A, D, E, K, J, H, G, L], // ADEGHJKL
    [A, D, E, K, I, J, G, L], // ADEGIJKL
    [A, D, E, K, I, H, J, L], // ADEHIJKL
    [A, D, F, K, I, H, G, J], // ADFGHIJK
    [A, D, F, H, I, J, G, L], // ADFGHIJL
    [A, D, F, K, I, H, G, L], // ADFGHIKL
    [A, D, F, K, J, H, G, L], // ADFGHJKL
    [A, D, F, K, I, J, G, L], // ADFGIJKL
    [A, D, F, K, I, H, J, L], // ADFHIJKL
    [A, D, H, K, I, J, G, L], // ADGHIJKL
    [A, F, E, K, I, H, G, J], // AEFGHIJK
    [A, F, E, H, I, J, G, L], // AEFGHIJL
    [A, F, E, K, I, H, G, L], // AEFGHIKL
    [A, F, E, K, J, H, G, L], // AEFGHJKL
    [A, F, E, K, I, J, G, L], // AEFGIJKL
    [A, F, E, K, I, H, J, L], // AEFHIJKL
    [A, G, E, K, I, H, J, L], // AEGHIJKL
    [A, F, H, K, I, J, G, L], // AFGHIJKL
    [B, C, E, H, F, I, G, D], // BCDEFGHI
    [B, C, E, H, F, J, G, D], // BCDEFGHJ
    [B, C, E, K, F, H, G, D], // BCDEFGHK
    [B, D, C, E, F, H, G, L], // BCDEFGHL
    [B, C, E, I, F, J, G, D], // BCDEFGIJ
    [B, C, E, K, F, I, G, D], // BCDEFGIK
    [B, D, C, E, F, I, G, L], // BCDEFGIL
    [B, C, E, K, F, J, G, D], // BCDEFGJK
    [B, D, C, E, F, J, G, L], // BCDEFGJL
    [B, D, C, K, F, E, G, L], // BCDEFGKL
    [B, C, E, H, F, I, J, D], // BCDEFHIJ
    [B, C, E, K, F, H, I, D], // BCDEFHIK
    [B, D, C, E, F, H, I, L], // BCDEFHIL
    [B, C, E, K, F, H, J, D], // BCDEFHJK
    [B, D, C, E, F, H, J, L], // BCDEFHJL
    [B, D, C, K, E, H, F, L], // BCDEFHKL
    [B, C, E, K, F, I, J, D], // BCDEFIJK
    [B, D, C, E, F, I, J, L], // BCDEFIJL
    [B, D, C, K, E, I, F, L], // BCDEFIKL
    [B, D, C, K, E, J, F, L], // BCDEFJKL
    [B, C, E, H, I, J, G, D], // BCDEGHIJ
    [B, C, E, K, I, H, G, D], // BCDEGHIK
    [B, D, C, E, I, H, G, L], // BCDEGHIL
    [B, C, E, K, J, H, G, D], // BCDEGHJK
    [B, D, C, E, J, H, G, L], // BCDEGHJL
    [B, D, C, K, E, H, G, L], // BCDEGHKL
    [B, C, E, K, I, J, G, D], // BCDEGIJK
    [B, D, C, E, I, J, G, L], // BCDEGIJL
    [B, D, C, K, E, I, G, L], // BCDEGIKL
    [B, D, C, K, E, J, G, L], // BCDEGJKL
    [B, C, E, K, I, H, J, D], // BCDEHIJK
    [B, D, C, E, I, H, J, L], // BCDEHIJL
    [B, D, C, K, E, H, I, L], // BCDEHIKL
    [B, D, C, K, E, H, J, L], // BCDEHJKL
    [B, D, C, K, E, I, J, L], // BCDEIJKL
    [B, C, F, H, I, J, G, D], // BCDFGHIJ
    [B, C, F, K, I, H, G, D], // BCDFGHIK
    [B, D, C, H, F, I, G, L], // BCDFGHIL
    [B, C, F, K, J, H, G, D], // BCDFGHJK
    [B, D, C, H, F, J, G, L], // BCDFGHJL
    [B, D, C, K, F, H, G, L], // BCDFGHKL
    [B, C, F, K, I, J, G, D], // BCDFGIJK
    [B, D, C, I, F, J, G, L], // BCDFGIJL
    [B, D, C, K, F, I, G, L], // BCDFGIKL
    [B, D, C, K, F, J, G, L], // BCDFGJKL
    [B, C, F, K, I, H, J, D], // BCDFHIJK
    [B, D, C, H, F, I, J, L], // BCDFHIJL
    [B, D, C, K, F, H, I, L], // BCDFHIKL
    [B, D, C, K, F, H, J, L], // BCDFHJKL
    [B, D, C, K, F, I, J, L], // BCDFIJKL
    [B, C, H, K, I, J, G, D], // BCDGHIJK
    [B, D, C, H, I, J, G, L], // BCDGHIJL
    [B, D, C, K, I, H, G, L], // BCDGHIKL
    [B, D, C, K, J, H, G, L], // BCDGHJKL
    [B, D, C, K, I, J, G, L], // BCDGIJKL
    [B, D, C, K, I, H, J, L], // BCDHIJKL
    [B, C, E, H, F, I, G, J], // BCEFGHIJ
    [B, C, E, K, F, H, G, I], // BCEFGHIK
    [B, C, E, H, F, I, G, L], // BCEFGHIL
    [B, C, E, K, F, H, G, J], // BCEFGHJK
    [B, C, E, H, F, J, G, L], // BCEFGHJL
    [B, C, E, K, F, H, G, L], // BCEFGHKL
    [B, C, E, K, F, I, G, J], // BCEFGIJK
    [B, C, E, I, F, J, G, L], // BCEFGIJL
    [B, C, E, K, F, I, G, L], // BCEFGIKL
    [B, C, E, K, F, J, G, L], // BCEFGJKL
    [B, C, E, K, F, H, I, J], // BCEFHIJK
    [B, C, E, H, F, I, J, L], // BCEFHIJL
    [B, C, E, K, F, H, I, L], // BCEFHIKL
    [B, C, E, K, F, H, J, L], // BCEFHJKL
    [B, C, E, K, F, I, J, L], // BCEFIJKL
    [B, C, E, K, I, H, G, J], // BCEGHIJK
    [B, C, E, H, I, J, G, L], // BCEGHIJL
    [B, C, E, K, I, H, G, L], // BCEGHIKL
    [B, C, E, K, J, H, G, L], // BCEGHJKL
    [B, C, E, K, I, J, G, L], // BCEGIJKL
    [B, C, E, K, I, H, J, L], // BCEHIJKL
    [B, C, F, K, I, H, G, J], // BCFGHIJK
    [B, C, F, H, I, J, G, L], // BCFGHIJL
    [B, C, F, K, I, H, G, L], // BCFGHIKL
    [B, C, F, K, J, H, G, L], // BCFGHJKL
    [B, C, F, K, I, J, G, L], // BCFGIJKL
    [B, C, F, K, I, H, J, L], // BCFHIJKL
    [B, C, H, K, I, J, G, L], // BCGHIJKL
    [B, D, E, H, F, I, G, J], // BDEFGHIJ
    [B, D, E, K, F, H, G, I], // BDEFGHIK
    [B, D, E, H, F, I, G, L], // BDEFGHIL
    [B, D, E, K, F, H, G, J], // BDEFGHJK
    [B, D, E, H, F, J, G, L], // BDEFGHJL
    [B, D, E, K, F, H, G, L], // BDEFGHKL
    [B, D, E, K, F, I, G, J], // BDEFGIJK
    [B, D, E, I, F, J, G, L], // BDEFGIJL
    [B, D, E, K, F, I, G, L], // BDEFGIKL
    [B, D, E, K, F, J, G, L], // BDEFGJKL
    [B, D, E, K, F, H, I, J], // BDEFHIJK
    [B, D, E, H, F, I, J, L], // BDEFHIJL
    [B, D, E, K, F, H, I, L], // BDEFHIKL
    [B, D, E, K, F, H, J, L], // BDEFHJKL
    [B, D, E, K, F, I, J, L], // BDEFIJKL
    [B, D, E, K, I, H, G, J], // BDEGHIJK
    [B, D, E, H, I, J, G, L], // BDEGHIJL
    [B, D, E, K, I, H, G, L], // BDEGHIKL
    [B, D, E, K, J, H, G, L], // BDEGHJKL
    [B, D, E, K, I, J, G, L], // BDEGIJKL
    [B, D, E, K, I, H, J, L], // BDEHIJKL
    [B, D, F, K, I, H, G, J], // BDFGHIJK
    [B, D, F, H, I, J, G, L], // BDFGHIJL
    [B, D, F, K, I, H, G, L], // BDFGHIKL
    [B, D, F, K, J, H, G, L], // BDFGHJKL
    [B, D, F, K, I, J, G, L], // BDFGIJKL
    [B, D, F, K, I, H, J, L], // BDFHIJKL
    [B, D, H, K, I, J, G, L], // BDGHIJKL
    [B, F, E, K, I, H, G, J], // BEFGHIJK
    [B, F, E, H, I, J, G, L], // BEFGHIJL
    [B, F, E, K, I, H, G, L], // BEFGHIKL
    [B, F, E, K, J, H, G, L], // BEFGHJKL
    [B, F, E, K, I, J, G, L], // BEFGIJKL
    [B, F, E, K, I, H, J, L], // BEFHIJKL
    [B, G, E, K, I, H, J, L], // BEGHIJKL
    [B, F, H, K, I, J, G, L], // BFGHIJKL
    [C, D, E, H, F, I, G, J], // CDEFGHIJ
    [C, D, E, K, F, H, G, I], // CDEFGHIK
    [C, D, E, H, F, I, G, L], // CDEFGHIL
    [C, D, E, K, F, H, G, J], // CDEFGHJK
    [C, D, E, H, F, J, G, L], // CDEFGHJL
    [C, D, E, K, F, H, G, L], // CDEFGHKL
    [C, D, E, K, F, I, G, J], // CDEFGIJK
    [C, D, E, I, F, J, G, L], // CDEFGIJL
    [C, D, E, K, F, I, G, L], // CDEFGIKL
    [C, D, E, K, F, J, G, L], // CDEFGJKL
    [C, D, E, K, F, H, I, J], // CDEFHIJK
    [C, D, E, H, F, I, J, L], // CDEFHIJL
    [C, D, E, K, F, H, I, L], // CDEFHIKL
    [C, D, E, K, F, H, J, L], // CDEFHJKL
    [C, D, E, K, F, I, J, L], // CDEFIJKL
    [C, D, E, K, I, H, G, J], // CDEGHIJK
    [C, D, E, H, I, J, G, L], // CDEGHIJL
    [C, D, E, K, I, H, G, L], // CDEGHIKL
    [C, D, E, K, J, H, G, L], // CDEGHJKL
    [C, D, E, K, I, J, G, L], // CDEGIJKL
    [C, D, E, K, I, H, J, L], // CDEHIJKL
    [C, D, F, K, I, H, G, J], // CDFGHIJK
    [C, D, F, H, I, J, G, L], // CDFGHIJL
    [C, D, F, K, I, H, G, L], // CDFGHIKL
    [C, D, F, K, J, H, G, L], // CDFGHJKL
    [C, D, F, K, I, J, G, L], // CDFGIJKL
    [C, D, F, K, I, H, J, L], // CDFHIJKL
    [C, D, H, K, I, J, G, L], // CDGHIJKL
    [C, F, E, K, I, H, G, J], // CEFGHIJK
    [C, F, E, H, I, J, G, L], // CEFGHIJL
    [C, F, E, K, I, H, G, L], // CEFGHIKL
    [C, F, E, K, J, H, G, L], // CEFGHJKL
    [C, F, E, K, I, J, G, L], // CEFGIJKL
    [C, F, E, K, I, H, J, L], // CEFHIJKL
    [C, G, E, K, I, H, J, L], // CEGHIJKL
    [C, F, H, K, I, J, G, L], // CFGHIJKL
    [D, F, E, K, I, H, G, J], // DEFGHIJK
    [D, F, E, H, I, J, G, L], // DEFGHIJL
    [D, F, E, K, I, H, G, L], // DEFGHIKL
    [D, F, E, K, J, H, G, L], // DEFGHJKL
    [D, F, E, K, I, J, G, L], // DEFGIJKL
    [D, F, E, K, I, H, J, L], // DEFHIJKL
    [D, G, E, K, I, H, J, L], // DEGHIJKL
    [D, F, H, K, I, J, G, L], // DFGHIJKL
    [F, G, E, K, I, H, J, L], // EFGHIJKL
];
