//! # Platonic Solid Datasets
//!
//! Reference geometry for the five Platonic solids. Faces are authored in
//! counter-clockwise boundary order viewed from outside, so these datasets
//! skip the winding-recovery pass.

use super::SolidData;

pub static TETRAHEDRON: SolidData = SolidData {
    name: "tetrahedron",
    vertices: &[
        [1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
    ],
    faces: &[
        &[0, 1, 2],
        &[1, 0, 3],
        &[0, 2, 3],
        &[2, 1, 3],
    ],
    prewound: true,
};

pub static CUBE: SolidData = SolidData {
    name: "cube",
    vertices: &[
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
    ],
    faces: &[
        &[0, 1, 3, 2],
        &[1, 0, 4, 5],
        &[0, 2, 6, 4],
        &[3, 1, 5, 7],
        &[2, 3, 7, 6],
        &[5, 4, 6, 7],
    ],
    prewound: true,
};

pub static OCTAHEDRON: SolidData = SolidData {
    name: "octahedron",
    vertices: &[
        [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, -1.0],
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
    ],
    faces: &[
        &[0, 1, 3],
        &[1, 0, 2],
        &[2, 0, 4],
        &[0, 3, 4],
        &[1, 2, 5],
        &[3, 1, 5],
        &[2, 4, 5],
        &[4, 3, 5],
    ],
    prewound: true,
};

pub static DODECAHEDRON: SolidData = SolidData {
    name: "dodecahedron",
    vertices: &[
        [-1.61803398875, 0.0, -0.61803398875],
        [-1.61803398875, 0.0, 0.61803398875],
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [-0.61803398875, -1.61803398875, 0.0],
        [-0.61803398875, 1.61803398875, 0.0],
        [0.0, -0.61803398875, -1.61803398875],
        [0.0, -0.61803398875, 1.61803398875],
        [0.0, 0.61803398875, -1.61803398875],
        [0.0, 0.61803398875, 1.61803398875],
        [0.61803398875, -1.61803398875, 0.0],
        [0.61803398875, 1.61803398875, 0.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        [1.61803398875, 0.0, -0.61803398875],
        [1.61803398875, 0.0, 0.61803398875],
    ],
    faces: &[
        &[0, 1, 5, 7, 4],
        &[1, 0, 2, 6, 3],
        &[2, 0, 4, 10, 8],
        &[1, 3, 9, 11, 5],
        &[6, 2, 8, 14, 12],
        &[3, 6, 12, 15, 9],
        &[4, 7, 13, 16, 10],
        &[7, 5, 11, 17, 13],
        &[8, 10, 16, 18, 14],
        &[11, 9, 15, 19, 17],
        &[12, 14, 18, 19, 15],
        &[16, 13, 17, 19, 18],
    ],
    prewound: true,
};

pub static ICOSAHEDRON: SolidData = SolidData {
    name: "icosahedron",
    vertices: &[
        [-1.61803398875, 0.0, -1.0],
        [-1.61803398875, 0.0, 1.0],
        [-1.0, -1.61803398875, 0.0],
        [-1.0, 1.61803398875, 0.0],
        [0.0, -1.0, -1.61803398875],
        [0.0, -1.0, 1.61803398875],
        [0.0, 1.0, -1.61803398875],
        [0.0, 1.0, 1.61803398875],
        [1.0, -1.61803398875, 0.0],
        [1.0, 1.61803398875, 0.0],
        [1.61803398875, 0.0, -1.0],
        [1.61803398875, 0.0, 1.0],
    ],
    faces: &[
        &[0, 1, 3],
        &[1, 0, 2],
        &[2, 0, 4],
        &[0, 3, 6],
        &[4, 0, 6],
        &[1, 2, 5],
        &[3, 1, 7],
        &[1, 5, 7],
        &[2, 4, 8],
        &[5, 2, 8],
        &[6, 3, 9],
        &[3, 7, 9],
        &[4, 6, 10],
        &[8, 4, 10],
        &[7, 5, 11],
        &[5, 8, 11],
        &[6, 9, 10],
        &[9, 7, 11],
        &[8, 10, 11],
        &[10, 9, 11],
    ],
    prewound: true,
};
