//! # Archimedean Solid Datasets
//!
//! Reference geometry for the thirteen Archimedean solids. Vertex sets come
//! from the standard Cartesian constructions (permutation orbits of a seed
//! coordinate). Face index sets are grouped by supporting plane but are NOT in
//! boundary order; the registry re-winds every face before deriving metrics.

use super::SolidData;

pub static TRUNCATED_TETRAHEDRON: SolidData = SolidData {
    name: "truncated_tetrahedron",
    vertices: &[
        [-3.0, -1.0, 1.0],
        [-3.0, 1.0, -1.0],
        [-1.0, -3.0, 1.0],
        [-1.0, -1.0, 3.0],
        [-1.0, 1.0, -3.0],
        [-1.0, 3.0, -1.0],
        [1.0, -3.0, -1.0],
        [1.0, -1.0, -3.0],
        [1.0, 1.0, 3.0],
        [1.0, 3.0, 1.0],
        [3.0, -1.0, -1.0],
        [3.0, 1.0, 1.0],
    ],
    faces: &[
        &[0, 1, 2, 4, 6, 7],
        &[0, 1, 3, 5, 8, 9],
        &[0, 2, 3],
        &[1, 4, 5],
        &[2, 3, 6, 8, 10, 11],
        &[4, 5, 7, 9, 10, 11],
        &[6, 7, 10],
        &[8, 9, 11],
    ],
    prewound: false,
};

pub static CUBOCTAHEDRON: SolidData = SolidData {
    name: "cuboctahedron",
    vertices: &[
        [-1.0, -1.0, 0.0],
        [-1.0, 0.0, -1.0],
        [-1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0],
        [0.0, -1.0, -1.0],
        [0.0, -1.0, 1.0],
        [0.0, 1.0, -1.0],
        [0.0, 1.0, 1.0],
        [1.0, -1.0, 0.0],
        [1.0, 0.0, -1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
    ],
    faces: &[
        &[0, 1, 2, 3],
        &[0, 1, 4],
        &[0, 2, 5],
        &[0, 4, 5, 8],
        &[1, 3, 6],
        &[1, 4, 6, 9],
        &[2, 3, 7],
        &[2, 5, 7, 10],
        &[3, 6, 7, 11],
        &[4, 8, 9],
        &[5, 8, 10],
        &[6, 9, 11],
        &[7, 10, 11],
        &[8, 9, 10, 11],
    ],
    prewound: false,
};

pub static TRUNCATED_CUBE: SolidData = SolidData {
    name: "truncated_cube",
    vertices: &[
        [-1.0, -1.0, -0.414213562373],
        [-1.0, -1.0, 0.414213562373],
        [-1.0, -0.414213562373, -1.0],
        [-1.0, -0.414213562373, 1.0],
        [-1.0, 0.414213562373, -1.0],
        [-1.0, 0.414213562373, 1.0],
        [-1.0, 1.0, -0.414213562373],
        [-1.0, 1.0, 0.414213562373],
        [-0.414213562373, -1.0, -1.0],
        [-0.414213562373, -1.0, 1.0],
        [-0.414213562373, 1.0, -1.0],
        [-0.414213562373, 1.0, 1.0],
        [0.414213562373, -1.0, -1.0],
        [0.414213562373, -1.0, 1.0],
        [0.414213562373, 1.0, -1.0],
        [0.414213562373, 1.0, 1.0],
        [1.0, -1.0, -0.414213562373],
        [1.0, -1.0, 0.414213562373],
        [1.0, -0.414213562373, -1.0],
        [1.0, -0.414213562373, 1.0],
        [1.0, 0.414213562373, -1.0],
        [1.0, 0.414213562373, 1.0],
        [1.0, 1.0, -0.414213562373],
        [1.0, 1.0, 0.414213562373],
    ],
    faces: &[
        &[0, 1, 2, 3, 4, 5, 6, 7],
        &[0, 1, 8, 9, 12, 13, 16, 17],
        &[0, 2, 8],
        &[1, 3, 9],
        &[2, 4, 8, 10, 12, 14, 18, 20],
        &[3, 5, 9, 11, 13, 15, 19, 21],
        &[4, 6, 10],
        &[5, 7, 11],
        &[6, 7, 10, 11, 14, 15, 22, 23],
        &[12, 16, 18],
        &[13, 17, 19],
        &[14, 20, 22],
        &[15, 21, 23],
        &[16, 17, 18, 19, 20, 21, 22, 23],
    ],
    prewound: false,
};

pub static TRUNCATED_OCTAHEDRON: SolidData = SolidData {
    name: "truncated_octahedron",
    vertices: &[
        [-2.0, -1.0, 0.0],
        [-2.0, 0.0, -1.0],
        [-2.0, 0.0, 1.0],
        [-2.0, 1.0, 0.0],
        [-1.0, -2.0, 0.0],
        [-1.0, 0.0, -2.0],
        [-1.0, 0.0, 2.0],
        [-1.0, 2.0, 0.0],
        [0.0, -2.0, -1.0],
        [0.0, -2.0, 1.0],
        [0.0, -1.0, -2.0],
        [0.0, -1.0, 2.0],
        [0.0, 1.0, -2.0],
        [0.0, 1.0, 2.0],
        [0.0, 2.0, -1.0],
        [0.0, 2.0, 1.0],
        [1.0, -2.0, 0.0],
        [1.0, 0.0, -2.0],
        [1.0, 0.0, 2.0],
        [1.0, 2.0, 0.0],
        [2.0, -1.0, 0.0],
        [2.0, 0.0, -1.0],
        [2.0, 0.0, 1.0],
        [2.0, 1.0, 0.0],
    ],
    faces: &[
        &[0, 1, 2, 3],
        &[0, 1, 4, 5, 8, 10],
        &[0, 2, 4, 6, 9, 11],
        &[1, 3, 5, 7, 12, 14],
        &[2, 3, 6, 7, 13, 15],
        &[4, 8, 9, 16],
        &[5, 10, 12, 17],
        &[6, 11, 13, 18],
        &[7, 14, 15, 19],
        &[8, 10, 16, 17, 20, 21],
        &[9, 11, 16, 18, 20, 22],
        &[12, 14, 17, 19, 21, 23],
        &[13, 15, 18, 19, 22, 23],
        &[20, 21, 22, 23],
    ],
    prewound: false,
};

pub static RHOMBICUBOCTAHEDRON: SolidData = SolidData {
    name: "rhombicuboctahedron",
    vertices: &[
        [-2.414213562373, -1.0, -1.0],
        [-2.414213562373, -1.0, 1.0],
        [-2.414213562373, 1.0, -1.0],
        [-2.414213562373, 1.0, 1.0],
        [-1.0, -2.414213562373, -1.0],
        [-1.0, -2.414213562373, 1.0],
        [-1.0, -1.0, -2.414213562373],
        [-1.0, -1.0, 2.414213562373],
        [-1.0, 1.0, -2.414213562373],
        [-1.0, 1.0, 2.414213562373],
        [-1.0, 2.414213562373, -1.0],
        [-1.0, 2.414213562373, 1.0],
        [1.0, -2.414213562373, -1.0],
        [1.0, -2.414213562373, 1.0],
        [1.0, -1.0, -2.414213562373],
        [1.0, -1.0, 2.414213562373],
        [1.0, 1.0, -2.414213562373],
        [1.0, 1.0, 2.414213562373],
        [1.0, 2.414213562373, -1.0],
        [1.0, 2.414213562373, 1.0],
        [2.414213562373, -1.0, -1.0],
        [2.414213562373, -1.0, 1.0],
        [2.414213562373, 1.0, -1.0],
        [2.414213562373, 1.0, 1.0],
    ],
    faces: &[
        &[0, 1, 2, 3],
        &[0, 1, 4, 5],
        &[0, 2, 6, 8],
        &[0, 4, 6],
        &[1, 3, 7, 9],
        &[1, 5, 7],
        &[2, 3, 10, 11],
        &[2, 8, 10],
        &[3, 9, 11],
        &[4, 5, 12, 13],
        &[4, 6, 12, 14],
        &[5, 7, 13, 15],
        &[6, 8, 14, 16],
        &[7, 9, 15, 17],
        &[8, 10, 16, 18],
        &[9, 11, 17, 19],
        &[10, 11, 18, 19],
        &[12, 13, 20, 21],
        &[12, 14, 20],
        &[13, 15, 21],
        &[14, 16, 20, 22],
        &[15, 17, 21, 23],
        &[16, 18, 22],
        &[17, 19, 23],
        &[18, 19, 22, 23],
        &[20, 21, 22, 23],
    ],
    prewound: false,
};

pub static TRUNCATED_CUBOCTAHEDRON: SolidData = SolidData {
    name: "truncated_cuboctahedron",
    vertices: &[
        [-3.828427124746, -2.414213562373, -1.0],
        [-3.828427124746, -2.414213562373, 1.0],
        [-3.828427124746, -1.0, -2.414213562373],
        [-3.828427124746, -1.0, 2.414213562373],
        [-3.828427124746, 1.0, -2.414213562373],
        [-3.828427124746, 1.0, 2.414213562373],
        [-3.828427124746, 2.414213562373, -1.0],
        [-3.828427124746, 2.414213562373, 1.0],
        [-2.414213562373, -3.828427124746, -1.0],
        [-2.414213562373, -3.828427124746, 1.0],
        [-2.414213562373, -1.0, -3.828427124746],
        [-2.414213562373, -1.0, 3.828427124746],
        [-2.414213562373, 1.0, -3.828427124746],
        [-2.414213562373, 1.0, 3.828427124746],
        [-2.414213562373, 3.828427124746, -1.0],
        [-2.414213562373, 3.828427124746, 1.0],
        [-1.0, -3.828427124746, -2.414213562373],
        [-1.0, -3.828427124746, 2.414213562373],
        [-1.0, -2.414213562373, -3.828427124746],
        [-1.0, -2.414213562373, 3.828427124746],
        [-1.0, 2.414213562373, -3.828427124746],
        [-1.0, 2.414213562373, 3.828427124746],
        [-1.0, 3.828427124746, -2.414213562373],
        [-1.0, 3.828427124746, 2.414213562373],
        [1.0, -3.828427124746, -2.414213562373],
        [1.0, -3.828427124746, 2.414213562373],
        [1.0, -2.414213562373, -3.828427124746],
        [1.0, -2.414213562373, 3.828427124746],
        [1.0, 2.414213562373, -3.828427124746],
        [1.0, 2.414213562373, 3.828427124746],
        [1.0, 3.828427124746, -2.414213562373],
        [1.0, 3.828427124746, 2.414213562373],
        [2.414213562373, -3.828427124746, -1.0],
        [2.414213562373, -3.828427124746, 1.0],
        [2.414213562373, -1.0, -3.828427124746],
        [2.414213562373, -1.0, 3.828427124746],
        [2.414213562373, 1.0, -3.828427124746],
        [2.414213562373, 1.0, 3.828427124746],
        [2.414213562373, 3.828427124746, -1.0],
        [2.414213562373, 3.828427124746, 1.0],
        [3.828427124746, -2.414213562373, -1.0],
        [3.828427124746, -2.414213562373, 1.0],
        [3.828427124746, -1.0, -2.414213562373],
        [3.828427124746, -1.0, 2.414213562373],
        [3.828427124746, 1.0, -2.414213562373],
        [3.828427124746, 1.0, 2.414213562373],
        [3.828427124746, 2.414213562373, -1.0],
        [3.828427124746, 2.414213562373, 1.0],
    ],
    faces: &[
        &[0, 1, 2, 3, 4, 5, 6, 7],
        &[0, 1, 8, 9],
        &[0, 2, 8, 10, 16, 18],
        &[1, 3, 9, 11, 17, 19],
        &[2, 4, 10, 12],
        &[3, 5, 11, 13],
        &[4, 6, 12, 14, 20, 22],
        &[5, 7, 13, 15, 21, 23],
        &[6, 7, 14, 15],
        &[8, 9, 16, 17, 24, 25, 32, 33],
        &[10, 12, 18, 20, 26, 28, 34, 36],
        &[11, 13, 19, 21, 27, 29, 35, 37],
        &[14, 15, 22, 23, 30, 31, 38, 39],
        &[16, 18, 24, 26],
        &[17, 19, 25, 27],
        &[20, 22, 28, 30],
        &[21, 23, 29, 31],
        &[24, 26, 32, 34, 40, 42],
        &[25, 27, 33, 35, 41, 43],
        &[28, 30, 36, 38, 44, 46],
        &[29, 31, 37, 39, 45, 47],
        &[32, 33, 40, 41],
        &[34, 36, 42, 44],
        &[35, 37, 43, 45],
        &[38, 39, 46, 47],
        &[40, 41, 42, 43, 44, 45, 46, 47],
    ],
    prewound: false,
};

pub static SNUB_CUBE: SolidData = SolidData {
    name: "snub_cube",
    vertices: &[
        [-1.839286755214, -1.0, 0.543689012692],
        [-1.839286755214, -0.543689012692, -1.0],
        [-1.839286755214, 0.543689012692, 1.0],
        [-1.839286755214, 1.0, -0.543689012692],
        [-1.0, -1.839286755214, -0.543689012692],
        [-1.0, -0.543689012692, 1.839286755214],
        [-1.0, 0.543689012692, -1.839286755214],
        [-1.0, 1.839286755214, 0.543689012692],
        [-0.543689012692, -1.839286755214, 1.0],
        [-0.543689012692, -1.0, -1.839286755214],
        [-0.543689012692, 1.0, 1.839286755214],
        [-0.543689012692, 1.839286755214, -1.0],
        [0.543689012692, -1.839286755214, -1.0],
        [0.543689012692, -1.0, 1.839286755214],
        [0.543689012692, 1.0, -1.839286755214],
        [0.543689012692, 1.839286755214, 1.0],
        [1.0, -1.839286755214, 0.543689012692],
        [1.0, -0.543689012692, -1.839286755214],
        [1.0, 0.543689012692, 1.839286755214],
        [1.0, 1.839286755214, -0.543689012692],
        [1.839286755214, -1.0, -0.543689012692],
        [1.839286755214, -0.543689012692, 1.0],
        [1.839286755214, 0.543689012692, -1.0],
        [1.839286755214, 1.0, 0.543689012692],
    ],
    faces: &[
        &[0, 1, 2, 3],
        &[0, 1, 4],
        &[0, 2, 5],
        &[0, 4, 8],
        &[0, 5, 8],
        &[1, 3, 6],
        &[1, 4, 9],
        &[1, 6, 9],
        &[2, 3, 7],
        &[2, 5, 10],
        &[2, 7, 10],
        &[3, 6, 11],
        &[3, 7, 11],
        &[4, 8, 12, 16],
        &[4, 9, 12],
        &[5, 8, 13],
        &[5, 10, 13, 18],
        &[6, 9, 14, 17],
        &[6, 11, 14],
        &[7, 10, 15],
        &[7, 11, 15, 19],
        &[8, 13, 16],
        &[9, 12, 17],
        &[10, 15, 18],
        &[11, 14, 19],
        &[12, 16, 20],
        &[12, 17, 20],
        &[13, 16, 21],
        &[13, 18, 21],
        &[14, 17, 22],
        &[14, 19, 22],
        &[15, 18, 23],
        &[15, 19, 23],
        &[16, 20, 21],
        &[17, 20, 22],
        &[18, 21, 23],
        &[19, 22, 23],
        &[20, 21, 22, 23],
    ],
    prewound: false,
};

pub static ICOSIDODECAHEDRON: SolidData = SolidData {
    name: "icosidodecahedron",
    vertices: &[
        [-1.61803398875, 0.0, 0.0],
        [-1.309016994375, -0.5, -0.809016994375],
        [-1.309016994375, -0.5, 0.809016994375],
        [-1.309016994375, 0.5, -0.809016994375],
        [-1.309016994375, 0.5, 0.809016994375],
        [-0.809016994375, -1.309016994375, -0.5],
        [-0.809016994375, -1.309016994375, 0.5],
        [-0.809016994375, 1.309016994375, -0.5],
        [-0.809016994375, 1.309016994375, 0.5],
        [-0.5, -0.809016994375, -1.309016994375],
        [-0.5, -0.809016994375, 1.309016994375],
        [-0.5, 0.809016994375, -1.309016994375],
        [-0.5, 0.809016994375, 1.309016994375],
        [0.0, -1.61803398875, 0.0],
        [0.0, 0.0, -1.61803398875],
        [0.0, 0.0, 1.61803398875],
        [0.0, 1.61803398875, 0.0],
        [0.5, -0.809016994375, -1.309016994375],
        [0.5, -0.809016994375, 1.309016994375],
        [0.5, 0.809016994375, -1.309016994375],
        [0.5, 0.809016994375, 1.309016994375],
        [0.809016994375, -1.309016994375, -0.5],
        [0.809016994375, -1.309016994375, 0.5],
        [0.809016994375, 1.309016994375, -0.5],
        [0.809016994375, 1.309016994375, 0.5],
        [1.309016994375, -0.5, -0.809016994375],
        [1.309016994375, -0.5, 0.809016994375],
        [1.309016994375, 0.5, -0.809016994375],
        [1.309016994375, 0.5, 0.809016994375],
        [1.61803398875, 0.0, 0.0],
    ],
    faces: &[
        &[0, 1, 2, 5, 6],
        &[0, 1, 3],
        &[0, 2, 4],
        &[0, 3, 4, 7, 8],
        &[1, 3, 9, 11, 14],
        &[1, 5, 9],
        &[2, 4, 10, 12, 15],
        &[2, 6, 10],
        &[3, 7, 11],
        &[4, 8, 12],
        &[5, 6, 13],
        &[5, 9, 13, 17, 21],
        &[6, 10, 13, 18, 22],
        &[7, 8, 16],
        &[7, 11, 16, 19, 23],
        &[8, 12, 16, 20, 24],
        &[9, 14, 17],
        &[10, 15, 18],
        &[11, 14, 19],
        &[12, 15, 20],
        &[13, 21, 22],
        &[14, 17, 19, 25, 27],
        &[15, 18, 20, 26, 28],
        &[16, 23, 24],
        &[17, 21, 25],
        &[18, 22, 26],
        &[19, 23, 27],
        &[20, 24, 28],
        &[21, 22, 25, 26, 29],
        &[23, 24, 27, 28, 29],
        &[25, 27, 29],
        &[26, 28, 29],
    ],
    prewound: false,
};

pub static TRUNCATED_DODECAHEDRON: SolidData = SolidData {
    name: "truncated_dodecahedron",
    vertices: &[
        [-3.61803398875, 0.0, -0.61803398875],
        [-3.61803398875, 0.0, 0.61803398875],
        [-3.2360679775, -0.61803398875, -1.61803398875],
        [-3.2360679775, -0.61803398875, 1.61803398875],
        [-3.2360679775, 0.61803398875, -1.61803398875],
        [-3.2360679775, 0.61803398875, 1.61803398875],
        [-2.61803398875, -1.61803398875, -2.0],
        [-2.61803398875, -1.61803398875, 2.0],
        [-2.61803398875, 1.61803398875, -2.0],
        [-2.61803398875, 1.61803398875, 2.0],
        [-2.0, -2.61803398875, -1.61803398875],
        [-2.0, -2.61803398875, 1.61803398875],
        [-2.0, 2.61803398875, -1.61803398875],
        [-2.0, 2.61803398875, 1.61803398875],
        [-1.61803398875, -3.2360679775, -0.61803398875],
        [-1.61803398875, -3.2360679775, 0.61803398875],
        [-1.61803398875, -2.0, -2.61803398875],
        [-1.61803398875, -2.0, 2.61803398875],
        [-1.61803398875, 2.0, -2.61803398875],
        [-1.61803398875, 2.0, 2.61803398875],
        [-1.61803398875, 3.2360679775, -0.61803398875],
        [-1.61803398875, 3.2360679775, 0.61803398875],
        [-0.61803398875, -3.61803398875, 0.0],
        [-0.61803398875, -1.61803398875, -3.2360679775],
        [-0.61803398875, -1.61803398875, 3.2360679775],
        [-0.61803398875, 1.61803398875, -3.2360679775],
        [-0.61803398875, 1.61803398875, 3.2360679775],
        [-0.61803398875, 3.61803398875, 0.0],
        [0.0, -0.61803398875, -3.61803398875],
        [0.0, -0.61803398875, 3.61803398875],
        [0.0, 0.61803398875, -3.61803398875],
        [0.0, 0.61803398875, 3.61803398875],
        [0.61803398875, -3.61803398875, 0.0],
        [0.61803398875, -1.61803398875, -3.2360679775],
        [0.61803398875, -1.61803398875, 3.2360679775],
        [0.61803398875, 1.61803398875, -3.2360679775],
        [0.61803398875, 1.61803398875, 3.2360679775],
        [0.61803398875, 3.61803398875, 0.0],
        [1.61803398875, -3.2360679775, -0.61803398875],
        [1.61803398875, -3.2360679775, 0.61803398875],
        [1.61803398875, -2.0, -2.61803398875],
        [1.61803398875, -2.0, 2.61803398875],
        [1.61803398875, 2.0, -2.61803398875],
        [1.61803398875, 2.0, 2.61803398875],
        [1.61803398875, 3.2360679775, -0.61803398875],
        [1.61803398875, 3.2360679775, 0.61803398875],
        [2.0, -2.61803398875, -1.61803398875],
        [2.0, -2.61803398875, 1.61803398875],
        [2.0, 2.61803398875, -1.61803398875],
        [2.0, 2.61803398875, 1.61803398875],
        [2.61803398875, -1.61803398875, -2.0],
        [2.61803398875, -1.61803398875, 2.0],
        [2.61803398875, 1.61803398875, -2.0],
        [2.61803398875, 1.61803398875, 2.0],
        [3.2360679775, -0.61803398875, -1.61803398875],
        [3.2360679775, -0.61803398875, 1.61803398875],
        [3.2360679775, 0.61803398875, -1.61803398875],
        [3.2360679775, 0.61803398875, 1.61803398875],
        [3.61803398875, 0.0, -0.61803398875],
        [3.61803398875, 0.0, 0.61803398875],
    ],
    faces: &[
        &[0, 1, 2, 3, 6, 7, 10, 11, 14, 15],
        &[0, 1, 4, 5, 8, 9, 12, 13, 20, 21],
        &[0, 2, 4],
        &[1, 3, 5],
        &[2, 4, 6, 8, 16, 18, 23, 25, 28, 30],
        &[3, 5, 7, 9, 17, 19, 24, 26, 29, 31],
        &[6, 10, 16],
        &[7, 11, 17],
        &[8, 12, 18],
        &[9, 13, 19],
        &[10, 14, 16, 22, 23, 32, 33, 38, 40, 46],
        &[11, 15, 17, 22, 24, 32, 34, 39, 41, 47],
        &[12, 18, 20, 25, 27, 35, 37, 42, 44, 48],
        &[13, 19, 21, 26, 27, 36, 37, 43, 45, 49],
        &[14, 15, 22],
        &[20, 21, 27],
        &[23, 28, 33],
        &[24, 29, 34],
        &[25, 30, 35],
        &[26, 31, 36],
        &[28, 30, 33, 35, 40, 42, 50, 52, 54, 56],
        &[29, 31, 34, 36, 41, 43, 51, 53, 55, 57],
        &[32, 38, 39],
        &[37, 44, 45],
        &[38, 39, 46, 47, 50, 51, 54, 55, 58, 59],
        &[40, 46, 50],
        &[41, 47, 51],
        &[42, 48, 52],
        &[43, 49, 53],
        &[44, 45, 48, 49, 52, 53, 56, 57, 58, 59],
        &[54, 56, 58],
        &[55, 57, 59],
    ],
    prewound: false,
};

pub static TRUNCATED_ICOSAHEDRON: SolidData = SolidData {
    name: "truncated_icosahedron",
    vertices: &[
        [-4.85410196625, 0.0, -1.0],
        [-4.85410196625, 0.0, 1.0],
        [-4.2360679775, -1.61803398875, -2.0],
        [-4.2360679775, -1.61803398875, 2.0],
        [-4.2360679775, 1.61803398875, -2.0],
        [-4.2360679775, 1.61803398875, 2.0],
        [-3.61803398875, -3.2360679775, -1.0],
        [-3.61803398875, -3.2360679775, 1.0],
        [-3.61803398875, 3.2360679775, -1.0],
        [-3.61803398875, 3.2360679775, 1.0],
        [-3.2360679775, -1.0, -3.61803398875],
        [-3.2360679775, -1.0, 3.61803398875],
        [-3.2360679775, 1.0, -3.61803398875],
        [-3.2360679775, 1.0, 3.61803398875],
        [-2.0, -4.2360679775, -1.61803398875],
        [-2.0, -4.2360679775, 1.61803398875],
        [-2.0, 4.2360679775, -1.61803398875],
        [-2.0, 4.2360679775, 1.61803398875],
        [-1.61803398875, -2.0, -4.2360679775],
        [-1.61803398875, -2.0, 4.2360679775],
        [-1.61803398875, 2.0, -4.2360679775],
        [-1.61803398875, 2.0, 4.2360679775],
        [-1.0, -4.85410196625, 0.0],
        [-1.0, -3.61803398875, -3.2360679775],
        [-1.0, -3.61803398875, 3.2360679775],
        [-1.0, 3.61803398875, -3.2360679775],
        [-1.0, 3.61803398875, 3.2360679775],
        [-1.0, 4.85410196625, 0.0],
        [0.0, -1.0, -4.85410196625],
        [0.0, -1.0, 4.85410196625],
        [0.0, 1.0, -4.85410196625],
        [0.0, 1.0, 4.85410196625],
        [1.0, -4.85410196625, 0.0],
        [1.0, -3.61803398875, -3.2360679775],
        [1.0, -3.61803398875, 3.2360679775],
        [1.0, 3.61803398875, -3.2360679775],
        [1.0, 3.61803398875, 3.2360679775],
        [1.0, 4.85410196625, 0.0],
        [1.61803398875, -2.0, -4.2360679775],
        [1.61803398875, -2.0, 4.2360679775],
        [1.61803398875, 2.0, -4.2360679775],
        [1.61803398875, 2.0, 4.2360679775],
        [2.0, -4.2360679775, -1.61803398875],
        [2.0, -4.2360679775, 1.61803398875],
        [2.0, 4.2360679775, -1.61803398875],
        [2.0, 4.2360679775, 1.61803398875],
        [3.2360679775, -1.0, -3.61803398875],
        [3.2360679775, -1.0, 3.61803398875],
        [3.2360679775, 1.0, -3.61803398875],
        [3.2360679775, 1.0, 3.61803398875],
        [3.61803398875, -3.2360679775, -1.0],
        [3.61803398875, -3.2360679775, 1.0],
        [3.61803398875, 3.2360679775, -1.0],
        [3.61803398875, 3.2360679775, 1.0],
        [4.2360679775, -1.61803398875, -2.0],
        [4.2360679775, -1.61803398875, 2.0],
        [4.2360679775, 1.61803398875, -2.0],
        [4.2360679775, 1.61803398875, 2.0],
        [4.85410196625, 0.0, -1.0],
        [4.85410196625, 0.0, 1.0],
    ],
    faces: &[
        &[0, 1, 2, 3, 6, 7],
        &[0, 1, 4, 5, 8, 9],
        &[0, 2, 4, 10, 12],
        &[1, 3, 5, 11, 13],
        &[2, 6, 10, 14, 18, 23],
        &[3, 7, 11, 15, 19, 24],
        &[4, 8, 12, 16, 20, 25],
        &[5, 9, 13, 17, 21, 26],
        &[6, 7, 14, 15, 22],
        &[8, 9, 16, 17, 27],
        &[10, 12, 18, 20, 28, 30],
        &[11, 13, 19, 21, 29, 31],
        &[14, 22, 23, 32, 33, 42],
        &[15, 22, 24, 32, 34, 43],
        &[16, 25, 27, 35, 37, 44],
        &[17, 26, 27, 36, 37, 45],
        &[18, 23, 28, 33, 38],
        &[19, 24, 29, 34, 39],
        &[20, 25, 30, 35, 40],
        &[21, 26, 31, 36, 41],
        &[28, 30, 38, 40, 46, 48],
        &[29, 31, 39, 41, 47, 49],
        &[32, 42, 43, 50, 51],
        &[33, 38, 42, 46, 50, 54],
        &[34, 39, 43, 47, 51, 55],
        &[35, 40, 44, 48, 52, 56],
        &[36, 41, 45, 49, 53, 57],
        &[37, 44, 45, 52, 53],
        &[46, 48, 54, 56, 58],
        &[47, 49, 55, 57, 59],
        &[50, 51, 54, 55, 58, 59],
        &[52, 53, 56, 57, 58, 59],
    ],
    prewound: false,
};

pub static RHOMBICOSIDODECAHEDRON: SolidData = SolidData {
    name: "rhombicosidodecahedron",
    vertices: &[
        [-4.2360679775, -1.0, -1.0],
        [-4.2360679775, -1.0, 1.0],
        [-4.2360679775, 1.0, -1.0],
        [-4.2360679775, 1.0, 1.0],
        [-3.61803398875, 0.0, -2.61803398875],
        [-3.61803398875, 0.0, 2.61803398875],
        [-3.2360679775, -2.61803398875, -1.61803398875],
        [-3.2360679775, -2.61803398875, 1.61803398875],
        [-3.2360679775, 2.61803398875, -1.61803398875],
        [-3.2360679775, 2.61803398875, 1.61803398875],
        [-2.61803398875, -3.61803398875, 0.0],
        [-2.61803398875, -1.61803398875, -3.2360679775],
        [-2.61803398875, -1.61803398875, 3.2360679775],
        [-2.61803398875, 1.61803398875, -3.2360679775],
        [-2.61803398875, 1.61803398875, 3.2360679775],
        [-2.61803398875, 3.61803398875, 0.0],
        [-1.61803398875, -3.2360679775, -2.61803398875],
        [-1.61803398875, -3.2360679775, 2.61803398875],
        [-1.61803398875, 3.2360679775, -2.61803398875],
        [-1.61803398875, 3.2360679775, 2.61803398875],
        [-1.0, -4.2360679775, -1.0],
        [-1.0, -4.2360679775, 1.0],
        [-1.0, -1.0, -4.2360679775],
        [-1.0, -1.0, 4.2360679775],
        [-1.0, 1.0, -4.2360679775],
        [-1.0, 1.0, 4.2360679775],
        [-1.0, 4.2360679775, -1.0],
        [-1.0, 4.2360679775, 1.0],
        [0.0, -2.61803398875, -3.61803398875],
        [0.0, -2.61803398875, 3.61803398875],
        [0.0, 2.61803398875, -3.61803398875],
        [0.0, 2.61803398875, 3.61803398875],
        [1.0, -4.2360679775, -1.0],
        [1.0, -4.2360679775, 1.0],
        [1.0, -1.0, -4.2360679775],
        [1.0, -1.0, 4.2360679775],
        [1.0, 1.0, -4.2360679775],
        [1.0, 1.0, 4.2360679775],
        [1.0, 4.2360679775, -1.0],
        [1.0, 4.2360679775, 1.0],
        [1.61803398875, -3.2360679775, -2.61803398875],
        [1.61803398875, -3.2360679775, 2.61803398875],
        [1.61803398875, 3.2360679775, -2.61803398875],
        [1.61803398875, 3.2360679775, 2.61803398875],
        [2.61803398875, -3.61803398875, 0.0],
        [2.61803398875, -1.61803398875, -3.2360679775],
        [2.61803398875, -1.61803398875, 3.2360679775],
        [2.61803398875, 1.61803398875, -3.2360679775],
        [2.61803398875, 1.61803398875, 3.2360679775],
        [2.61803398875, 3.61803398875, 0.0],
        [3.2360679775, -2.61803398875, -1.61803398875],
        [3.2360679775, -2.61803398875, 1.61803398875],
        [3.2360679775, 2.61803398875, -1.61803398875],
        [3.2360679775, 2.61803398875, 1.61803398875],
        [3.61803398875, 0.0, -2.61803398875],
        [3.61803398875, 0.0, 2.61803398875],
        [4.2360679775, -1.0, -1.0],
        [4.2360679775, -1.0, 1.0],
        [4.2360679775, 1.0, -1.0],
        [4.2360679775, 1.0, 1.0],
    ],
    faces: &[
        &[0, 1, 2, 3],
        &[0, 1, 6, 7, 10],
        &[0, 2, 4],
        &[0, 4, 6, 11],
        &[1, 3, 5],
        &[1, 5, 7, 12],
        &[2, 3, 8, 9, 15],
        &[2, 4, 8, 13],
        &[3, 5, 9, 14],
        &[4, 11, 13, 22, 24],
        &[5, 12, 14, 23, 25],
        &[6, 10, 16, 20],
        &[6, 11, 16],
        &[7, 10, 17, 21],
        &[7, 12, 17],
        &[8, 13, 18],
        &[8, 15, 18, 26],
        &[9, 14, 19],
        &[9, 15, 19, 27],
        &[10, 20, 21],
        &[11, 16, 22, 28],
        &[12, 17, 23, 29],
        &[13, 18, 24, 30],
        &[14, 19, 25, 31],
        &[15, 26, 27],
        &[16, 20, 28, 32, 40],
        &[17, 21, 29, 33, 41],
        &[18, 26, 30, 38, 42],
        &[19, 27, 31, 39, 43],
        &[20, 21, 32, 33],
        &[22, 24, 34, 36],
        &[22, 28, 34],
        &[23, 25, 35, 37],
        &[23, 29, 35],
        &[24, 30, 36],
        &[25, 31, 37],
        &[26, 27, 38, 39],
        &[28, 34, 40, 45],
        &[29, 35, 41, 46],
        &[30, 36, 42, 47],
        &[31, 37, 43, 48],
        &[32, 33, 44],
        &[32, 40, 44, 50],
        &[33, 41, 44, 51],
        &[34, 36, 45, 47, 54],
        &[35, 37, 46, 48, 55],
        &[38, 39, 49],
        &[38, 42, 49, 52],
        &[39, 43, 49, 53],
        &[40, 45, 50],
        &[41, 46, 51],
        &[42, 47, 52],
        &[43, 48, 53],
        &[44, 50, 51, 56, 57],
        &[45, 50, 54, 56],
        &[46, 51, 55, 57],
        &[47, 52, 54, 58],
        &[48, 53, 55, 59],
        &[49, 52, 53, 58, 59],
        &[54, 56, 58],
        &[55, 57, 59],
        &[56, 57, 58, 59],
    ],
    prewound: false,
};

pub static TRUNCATED_ICOSIDODECAHEDRON: SolidData = SolidData {
    name: "truncated_icosidodecahedron",
    vertices: &[
        [-4.61803398875, -0.61803398875, -0.61803398875],
        [-4.61803398875, -0.61803398875, 0.61803398875],
        [-4.61803398875, 0.61803398875, -0.61803398875],
        [-4.61803398875, 0.61803398875, 0.61803398875],
        [-4.2360679775, -1.2360679775, -1.61803398875],
        [-4.2360679775, -1.2360679775, 1.61803398875],
        [-4.2360679775, 1.2360679775, -1.61803398875],
        [-4.2360679775, 1.2360679775, 1.61803398875],
        [-3.85410196625, -0.61803398875, -2.61803398875],
        [-3.85410196625, -0.61803398875, 2.61803398875],
        [-3.85410196625, 0.61803398875, -2.61803398875],
        [-3.85410196625, 0.61803398875, 2.61803398875],
        [-3.61803398875, -2.2360679775, -2.0],
        [-3.61803398875, -2.2360679775, 2.0],
        [-3.61803398875, 2.2360679775, -2.0],
        [-3.61803398875, 2.2360679775, 2.0],
        [-3.2360679775, -1.61803398875, -3.0],
        [-3.2360679775, -1.61803398875, 3.0],
        [-3.2360679775, 1.61803398875, -3.0],
        [-3.2360679775, 1.61803398875, 3.0],
        [-3.0, -3.2360679775, -1.61803398875],
        [-3.0, -3.2360679775, 1.61803398875],
        [-3.0, 3.2360679775, -1.61803398875],
        [-3.0, 3.2360679775, 1.61803398875],
        [-2.61803398875, -3.85410196625, -0.61803398875],
        [-2.61803398875, -3.85410196625, 0.61803398875],
        [-2.61803398875, 3.85410196625, -0.61803398875],
        [-2.61803398875, 3.85410196625, 0.61803398875],
        [-2.2360679775, -2.0, -3.61803398875],
        [-2.2360679775, -2.0, 3.61803398875],
        [-2.2360679775, 2.0, -3.61803398875],
        [-2.2360679775, 2.0, 3.61803398875],
        [-2.0, -3.61803398875, -2.2360679775],
        [-2.0, -3.61803398875, 2.2360679775],
        [-2.0, 3.61803398875, -2.2360679775],
        [-2.0, 3.61803398875, 2.2360679775],
        [-1.61803398875, -4.2360679775, -1.2360679775],
        [-1.61803398875, -4.2360679775, 1.2360679775],
        [-1.61803398875, -3.0, -3.2360679775],
        [-1.61803398875, -3.0, 3.2360679775],
        [-1.61803398875, 3.0, -3.2360679775],
        [-1.61803398875, 3.0, 3.2360679775],
        [-1.61803398875, 4.2360679775, -1.2360679775],
        [-1.61803398875, 4.2360679775, 1.2360679775],
        [-1.2360679775, -1.61803398875, -4.2360679775],
        [-1.2360679775, -1.61803398875, 4.2360679775],
        [-1.2360679775, 1.61803398875, -4.2360679775],
        [-1.2360679775, 1.61803398875, 4.2360679775],
        [-0.61803398875, -4.61803398875, -0.61803398875],
        [-0.61803398875, -4.61803398875, 0.61803398875],
        [-0.61803398875, -2.61803398875, -3.85410196625],
        [-0.61803398875, -2.61803398875, 3.85410196625],
        [-0.61803398875, -0.61803398875, -4.61803398875],
        [-0.61803398875, -0.61803398875, 4.61803398875],
        [-0.61803398875, 0.61803398875, -4.61803398875],
        [-0.61803398875, 0.61803398875, 4.61803398875],
        [-0.61803398875, 2.61803398875, -3.85410196625],
        [-0.61803398875, 2.61803398875, 3.85410196625],
        [-0.61803398875, 4.61803398875, -0.61803398875],
        [-0.61803398875, 4.61803398875, 0.61803398875],
        [0.61803398875, -4.61803398875, -0.61803398875],
        [0.61803398875, -4.61803398875, 0.61803398875],
        [0.61803398875, -2.61803398875, -3.85410196625],
        [0.61803398875, -2.61803398875, 3.85410196625],
        [0.61803398875, -0.61803398875, -4.61803398875],
        [0.61803398875, -0.61803398875, 4.61803398875],
        [0.61803398875, 0.61803398875, -4.61803398875],
        [0.61803398875, 0.61803398875, 4.61803398875],
        [0.61803398875, 2.61803398875, -3.85410196625],
        [0.61803398875, 2.61803398875, 3.85410196625],
        [0.61803398875, 4.61803398875, -0.61803398875],
        [0.61803398875, 4.61803398875, 0.61803398875],
        [1.2360679775, -1.61803398875, -4.2360679775],
        [1.2360679775, -1.61803398875, 4.2360679775],
        [1.2360679775, 1.61803398875, -4.2360679775],
        [1.2360679775, 1.61803398875, 4.2360679775],
        [1.61803398875, -4.2360679775, -1.2360679775],
        [1.61803398875, -4.2360679775, 1.2360679775],
        [1.61803398875, -3.0, -3.2360679775],
        [1.61803398875, -3.0, 3.2360679775],
        [1.61803398875, 3.0, -3.2360679775],
        [1.61803398875, 3.0, 3.2360679775],
        [1.61803398875, 4.2360679775, -1.2360679775],
        [1.61803398875, 4.2360679775, 1.2360679775],
        [2.0, -3.61803398875, -2.2360679775],
        [2.0, -3.61803398875, 2.2360679775],
        [2.0, 3.61803398875, -2.2360679775],
        [2.0, 3.61803398875, 2.2360679775],
        [2.2360679775, -2.0, -3.61803398875],
        [2.2360679775, -2.0, 3.61803398875],
        [2.2360679775, 2.0, -3.61803398875],
        [2.2360679775, 2.0, 3.61803398875],
        [2.61803398875, -3.85410196625, -0.61803398875],
        [2.61803398875, -3.85410196625, 0.61803398875],
        [2.61803398875, 3.85410196625, -0.61803398875],
        [2.61803398875, 3.85410196625, 0.61803398875],
        [3.0, -3.2360679775, -1.61803398875],
        [3.0, -3.2360679775, 1.61803398875],
        [3.0, 3.2360679775, -1.61803398875],
        [3.0, 3.2360679775, 1.61803398875],
        [3.2360679775, -1.61803398875, -3.0],
        [3.2360679775, -1.61803398875, 3.0],
        [3.2360679775, 1.61803398875, -3.0],
        [3.2360679775, 1.61803398875, 3.0],
        [3.61803398875, -2.2360679775, -2.0],
        [3.61803398875, -2.2360679775, 2.0],
        [3.61803398875, 2.2360679775, -2.0],
        [3.61803398875, 2.2360679775, 2.0],
        [3.85410196625, -0.61803398875, -2.61803398875],
        [3.85410196625, -0.61803398875, 2.61803398875],
        [3.85410196625, 0.61803398875, -2.61803398875],
        [3.85410196625, 0.61803398875, 2.61803398875],
        [4.2360679775, -1.2360679775, -1.61803398875],
        [4.2360679775, -1.2360679775, 1.61803398875],
        [4.2360679775, 1.2360679775, -1.61803398875],
        [4.2360679775, 1.2360679775, 1.61803398875],
        [4.61803398875, -0.61803398875, -0.61803398875],
        [4.61803398875, -0.61803398875, 0.61803398875],
        [4.61803398875, 0.61803398875, -0.61803398875],
        [4.61803398875, 0.61803398875, 0.61803398875],
    ],
    faces: &[
        &[0, 1, 2, 3],
        &[0, 1, 4, 5, 12, 13, 20, 21, 24, 25],
        &[0, 2, 4, 6, 8, 10],
        &[1, 3, 5, 7, 9, 11],
        &[2, 3, 6, 7, 14, 15, 22, 23, 26, 27],
        &[4, 8, 12, 16],
        &[5, 9, 13, 17],
        &[6, 10, 14, 18],
        &[7, 11, 15, 19],
        &[8, 10, 16, 18, 28, 30, 44, 46, 52, 54],
        &[9, 11, 17, 19, 29, 31, 45, 47, 53, 55],
        &[12, 16, 20, 28, 32, 38],
        &[13, 17, 21, 29, 33, 39],
        &[14, 18, 22, 30, 34, 40],
        &[15, 19, 23, 31, 35, 41],
        &[20, 24, 32, 36],
        &[21, 25, 33, 37],
        &[22, 26, 34, 42],
        &[23, 27, 35, 43],
        &[24, 25, 36, 37, 48, 49],
        &[26, 27, 42, 43, 58, 59],
        &[28, 38, 44, 50],
        &[29, 39, 45, 51],
        &[30, 40, 46, 56],
        &[31, 41, 47, 57],
        &[32, 36, 38, 48, 50, 60, 62, 76, 78, 84],
        &[33, 37, 39, 49, 51, 61, 63, 77, 79, 85],
        &[34, 40, 42, 56, 58, 68, 70, 80, 82, 86],
        &[35, 41, 43, 57, 59, 69, 71, 81, 83, 87],
        &[44, 50, 52, 62, 64, 72],
        &[45, 51, 53, 63, 65, 73],
        &[46, 54, 56, 66, 68, 74],
        &[47, 55, 57, 67, 69, 75],
        &[48, 49, 60, 61],
        &[52, 54, 64, 66],
        &[53, 55, 65, 67],
        &[58, 59, 70, 71],
        &[60, 61, 76, 77, 92, 93],
        &[62, 72, 78, 88],
        &[63, 73, 79, 89],
        &[64, 66, 72, 74, 88, 90, 100, 102, 108, 110],
        &[65, 67, 73, 75, 89, 91, 101, 103, 109, 111],
        &[68, 74, 80, 90],
        &[69, 75, 81, 91],
        &[70, 71, 82, 83, 94, 95],
        &[76, 84, 92, 96],
        &[77, 85, 93, 97],
        &[78, 84, 88, 96, 100, 104],
        &[79, 85, 89, 97, 101, 105],
        &[80, 86, 90, 98, 102, 106],
        &[81, 87, 91, 99, 103, 107],
        &[82, 86, 94, 98],
        &[83, 87, 95, 99],
        &[92, 93, 96, 97, 104, 105, 112, 113, 116, 117],
        &[94, 95, 98, 99, 106, 107, 114, 115, 118, 119],
        &[100, 104, 108, 112],
        &[101, 105, 109, 113],
        &[102, 106, 110, 114],
        &[103, 107, 111, 115],
        &[108, 110, 112, 114, 116, 118],
        &[109, 111, 113, 115, 117, 119],
        &[116, 117, 118, 119],
    ],
    prewound: false,
};

pub static SNUB_DODECAHEDRON: SolidData = SolidData {
    name: "snub_dodecahedron",
    vertices: &[
        [-0.972732850566, -0.153499994271, -0.173863605131],
        [-0.972732850566, 0.153499994271, 0.173863605131],
        [-0.917434212919, -0.298273707162, 0.263338680375],
        [-0.917434212919, 0.298273707162, -0.263338680375],
        [-0.809980595541, -0.579590929671, -0.089475075244],
        [-0.809980595541, 0.579590929671, 0.089475075244],
        [-0.763934218648, -0.393141920894, -0.511706888379],
        [-0.763934218648, 0.393141920894, 0.511706888379],
        [-0.674459143404, -0.337843283248, 0.65648060127],
        [-0.674459143404, 0.337843283248, -0.65648060127],
        [-0.65648060127, -0.674459143404, 0.337843283248],
        [-0.65648060127, 0.674459143404, -0.337843283248],
        [-0.579590929671, -0.089475075244, -0.809980595541],
        [-0.579590929671, 0.089475075244, 0.809980595541],
        [-0.511706888379, -0.763934218648, -0.393141920894],
        [-0.511706888379, 0.763934218648, 0.393141920894],
        [-0.393141920894, -0.511706888379, -0.763934218648],
        [-0.393141920894, 0.511706888379, 0.763934218648],
        [-0.337843283248, -0.65648060127, 0.674459143404],
        [-0.337843283248, 0.65648060127, -0.674459143404],
        [-0.298273707162, -0.263338680375, 0.917434212919],
        [-0.298273707162, 0.263338680375, -0.917434212919],
        [-0.263338680375, -0.917434212919, 0.298273707162],
        [-0.263338680375, 0.917434212919, -0.298273707162],
        [-0.173863605131, -0.972732850566, -0.153499994271],
        [-0.173863605131, 0.972732850566, 0.153499994271],
        [-0.153499994271, -0.173863605131, -0.972732850566],
        [-0.153499994271, 0.173863605131, 0.972732850566],
        [-0.089475075244, -0.809980595541, -0.579590929671],
        [-0.089475075244, 0.809980595541, 0.579590929671],
        [0.089475075244, -0.809980595541, 0.579590929671],
        [0.089475075244, 0.809980595541, -0.579590929671],
        [0.153499994271, -0.173863605131, 0.972732850566],
        [0.153499994271, 0.173863605131, -0.972732850566],
        [0.173863605131, -0.972732850566, 0.153499994271],
        [0.173863605131, 0.972732850566, -0.153499994271],
        [0.263338680375, -0.917434212919, -0.298273707162],
        [0.263338680375, 0.917434212919, 0.298273707162],
        [0.298273707162, -0.263338680375, -0.917434212919],
        [0.298273707162, 0.263338680375, 0.917434212919],
        [0.337843283248, -0.65648060127, -0.674459143404],
        [0.337843283248, 0.65648060127, 0.674459143404],
        [0.393141920894, -0.511706888379, 0.763934218648],
        [0.393141920894, 0.511706888379, -0.763934218648],
        [0.511706888379, -0.763934218648, 0.393141920894],
        [0.511706888379, 0.763934218648, -0.393141920894],
        [0.579590929671, -0.089475075244, 0.809980595541],
        [0.579590929671, 0.089475075244, -0.809980595541],
        [0.65648060127, -0.674459143404, -0.337843283248],
        [0.65648060127, 0.674459143404, 0.337843283248],
        [0.674459143404, -0.337843283248, -0.65648060127],
        [0.674459143404, 0.337843283248, 0.65648060127],
        [0.763934218648, -0.393141920894, 0.511706888379],
        [0.763934218648, 0.393141920894, -0.511706888379],
        [0.809980595541, -0.579590929671, 0.089475075244],
        [0.809980595541, 0.579590929671, -0.089475075244],
        [0.917434212919, -0.298273707162, -0.263338680375],
        [0.917434212919, 0.298273707162, 0.263338680375],
        [0.972732850566, -0.153499994271, 0.173863605131],
        [0.972732850566, 0.153499994271, -0.173863605131],
    ],
    faces: &[
        &[0, 1, 2],
        &[0, 1, 3],
        &[0, 2, 4],
        &[0, 3, 6, 9, 12],
        &[0, 4, 6],
        &[1, 2, 7, 8, 13],
        &[1, 3, 5],
        &[1, 5, 7],
        &[2, 4, 10],
        &[2, 8, 10],
        &[3, 5, 11],
        &[3, 9, 11],
        &[4, 6, 14],
        &[4, 10, 14, 22, 24],
        &[5, 7, 15],
        &[5, 11, 15, 23, 25],
        &[6, 12, 16],
        &[6, 14, 16],
        &[7, 13, 17],
        &[7, 15, 17],
        &[8, 10, 18],
        &[8, 13, 20],
        &[8, 18, 20],
        &[9, 11, 19],
        &[9, 12, 21],
        &[9, 19, 21],
        &[10, 18, 22],
        &[11, 19, 23],
        &[12, 16, 26],
        &[12, 21, 26],
        &[13, 17, 27],
        &[13, 20, 27],
        &[14, 16, 28],
        &[14, 24, 28],
        &[15, 17, 29],
        &[15, 25, 29],
        &[16, 26, 28, 38, 40],
        &[17, 27, 29, 39, 41],
        &[18, 20, 30, 32, 42],
        &[18, 22, 30],
        &[19, 21, 31, 33, 43],
        &[19, 23, 31],
        &[20, 27, 32],
        &[21, 26, 33],
        &[22, 24, 34],
        &[22, 30, 34],
        &[23, 25, 35],
        &[23, 31, 35],
        &[24, 28, 36],
        &[24, 34, 36],
        &[25, 29, 37],
        &[25, 35, 37],
        &[26, 33, 38],
        &[27, 32, 39],
        &[28, 36, 40],
        &[29, 37, 41],
        &[30, 34, 44],
        &[30, 42, 44],
        &[31, 35, 45],
        &[31, 43, 45],
        &[32, 39, 46],
        &[32, 42, 46],
        &[33, 38, 47],
        &[33, 43, 47],
        &[34, 36, 44, 48, 54],
        &[35, 37, 45, 49, 55],
        &[36, 40, 48],
        &[37, 41, 49],
        &[38, 40, 50],
        &[38, 47, 50],
        &[39, 41, 51],
        &[39, 46, 51],
        &[40, 48, 50],
        &[41, 49, 51],
        &[42, 44, 52],
        &[42, 46, 52],
        &[43, 45, 53],
        &[43, 47, 53],
        &[44, 52, 54],
        &[45, 53, 55],
        &[46, 51, 52, 57, 58],
        &[47, 50, 53, 56, 59],
        &[48, 50, 56],
        &[48, 54, 56],
        &[49, 51, 57],
        &[49, 55, 57],
        &[52, 54, 58],
        &[53, 55, 59],
        &[54, 56, 58],
        &[55, 57, 59],
        &[56, 58, 59],
        &[57, 58, 59],
    ],
    prewound: false,
};
