use crate::alphabet::{self, ALPHABET, SIZE};
use crate::cipher::{Cipher, CipherMode, CipherType};

/// Side length of the Playfair grid
pub const GRID_SIZE: usize = 5;

/// (row, column) position inside the grid
pub type Coord = (usize, usize);

/// 5x5 letter grid with lookups in both directions.
///
/// 'J' is merged into 'I', so the grid holds the remaining 25 letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairGrid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
    positions: [Option<Coord>; SIZE],
}

impl PlayfairGrid {
    /// Build the grid from a raw keyword
    pub fn from_key(key: &str) -> Self {
        let mut seen = [false; SIZE];
        let mut letters = Vec::with_capacity(GRID_SIZE * GRID_SIZE);

        let candidates = key
            .bytes()
            .chain(ALPHABET.iter().copied())
            .map(|b| b.to_ascii_uppercase())
            .filter(|b| b.is_ascii_uppercase())
            .map(fold_j);

        for letter in candidates {
            if let Some(index) = alphabet::index_of(letter) {
                if !seen[index] {
                    seen[index] = true;
                    letters.push(letter);
                }
            }
        }

        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        let mut positions = [None; SIZE];
        for (i, &letter) in letters.iter().enumerate() {
            let coord = (i / GRID_SIZE, i % GRID_SIZE);
            cells[coord.0][coord.1] = letter;
            if let Some(index) = alphabet::index_of(letter) {
                positions[index] = Some(coord);
            }
        }

        Self { cells, positions }
    }

    /// Grid position of a letter; `None` for 'J' and non-letters
    pub fn coord_of(&self, letter: u8) -> Option<Coord> {
        alphabet::index_of(letter).and_then(|i| self.positions[i])
    }

    pub fn letter_at(&self, (row, col): Coord) -> u8 {
        self.cells[row % GRID_SIZE][col % GRID_SIZE]
    }

    /// The 25 letters in row-major order
    pub fn letters(&self) -> String {
        self.cells.iter().flatten().map(|&b| b as char).collect()
    }
}

/// Digraph substitution over a keyword-derived grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairCipher {
    grid: PlayfairGrid,
}

impl PlayfairCipher {
    pub fn new(key: &str) -> Self {
        Self {
            grid: PlayfairGrid::from_key(key),
        }
    }

    /// Re-key the cipher. The grid is rebuilt whole and then swapped in.
    pub fn set_key(&mut self, key: &str) {
        self.grid = PlayfairGrid::from_key(key);
    }

    pub fn grid(&self) -> &PlayfairGrid {
        &self.grid
    }

    fn substitute(&self, pair: [u8; 2], mode: CipherMode) -> [u8; 2] {
        let (Some((r1, c1)), Some((r2, c2))) =
            (self.grid.coord_of(pair[0]), self.grid.coord_of(pair[1]))
        else {
            return pair;
        };
        let shift = match mode {
            CipherMode::Encrypt => 1,
            CipherMode::Decrypt => GRID_SIZE - 1,
        };

        let (a, b) = if r1 == r2 {
            ((r1, c1 + shift), (r2, c2 + shift))
        } else if c1 == c2 {
            ((r1 + shift, c1), (r2 + shift, c2))
        } else {
            // rectangle rule is its own inverse
            ((r1, c2), (r2, c1))
        };
        [self.grid.letter_at(a), self.grid.letter_at(b)]
    }
}

impl Cipher for PlayfairCipher {
    fn apply_cipher(&self, input: &str, mode: CipherMode) -> String {
        let prepared = prepare_digraphs(input);
        let mut output = String::with_capacity(prepared.len());
        for pair in prepared.chunks_exact(2) {
            let [a, b] = self.substitute([pair[0], pair[1]], mode);
            output.push(a as char);
            output.push(b as char);
        }
        output
    }

    fn cipher_type(&self) -> CipherType {
        CipherType::Playfair
    }
}

fn fold_j(letter: u8) -> u8 {
    if letter == b'J' {
        b'I'
    } else {
        letter
    }
}

/// Fold J into I and split into digraphs, inserting fillers so that no pair
/// repeats a letter and the total length is even.
///
/// Anything that is not an uppercase letter is dropped first.
pub fn prepare_digraphs(input: &str) -> Vec<u8> {
    let letters: Vec<u8> = input
        .bytes()
        .filter(|b| b.is_ascii_uppercase())
        .map(fold_j)
        .collect();

    let mut output = Vec::with_capacity(letters.len() + letters.len() / 10 + 2);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        output.push(first);
        match letters.get(i + 1) {
            None => {
                output.push(if first == b'Z' { b'X' } else { b'Z' });
                i += 1;
            }
            Some(&second) if second == first => {
                output.push(if first == b'X' { b'Q' } else { b'X' });
                i += 1;
            }
            Some(&second) => {
                output.push(second);
                i += 2;
            }
        }
    }
    output
}
