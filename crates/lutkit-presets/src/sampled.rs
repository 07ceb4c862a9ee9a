/// 256 evenly spaced RGB samples, red-brown soft tissue rising to near-white bone.
pub(crate) const MUSCLE_BONE: [[u8; 3]; 256] = [
    [0, 0, 0], [2, 0, 0], [5, 0, 0], [8, 0, 0],
    [10, 0, 1], [13, 1, 1], [16, 1, 1], [18, 1, 2],
    [21, 1, 2], [24, 2, 2], [26, 2, 2], [29, 2, 3],
    [32, 2, 3], [34, 3, 3], [37, 3, 4], [40, 3, 4],
    [42, 3, 4], [45, 3, 5], [48, 4, 5], [51, 4, 5],
    [53, 4, 5], [56, 4, 6], [59, 5, 6], [61, 5, 6],
    [64, 5, 7], [67, 5, 7], [69, 6, 7], [72, 6, 7],
    [75, 6, 8], [77, 6, 8], [80, 6, 8], [83, 7, 9],
    [85, 7, 9], [88, 7, 9], [91, 7, 10], [93, 8, 10],
    [96, 8, 10], [99, 8, 10], [102, 8, 11], [104, 9, 11],
    [107, 9, 11], [110, 9, 12], [112, 9, 12], [115, 9, 12],
    [118, 10, 12], [120, 10, 13], [123, 10, 13], [126, 10, 13],
    [128, 11, 14], [131, 11, 14], [134, 11, 14], [136, 11, 15],
    [139, 12, 15], [142, 12, 15], [144, 12, 15], [147, 12, 16],
    [150, 12, 16], [153, 13, 16], [155, 13, 17], [158, 13, 17],
    [161, 13, 17], [163, 14, 17], [166, 14, 18], [169, 14, 18],
    [171, 14, 18], [174, 15, 19], [177, 15, 19], [179, 15, 19],
    [182, 15, 20], [185, 15, 20], [187, 16, 20], [190, 16, 20],
    [193, 16, 21], [195, 16, 21], [198, 17, 21], [201, 17, 22],
    [204, 17, 22], [206, 17, 22], [209, 18, 22], [212, 18, 23],
    [214, 18, 23], [217, 18, 23], [220, 18, 24], [222, 19, 24],
    [225, 19, 24], [228, 19, 25], [230, 19, 25], [233, 20, 25],
    [236, 20, 25], [238, 20, 26], [241, 20, 26], [244, 21, 26],
    [246, 21, 27], [249, 21, 27], [252, 21, 27], [255, 21, 27],
    [255, 24, 27], [255, 27, 27], [255, 30, 26], [255, 33, 26],
    [255, 36, 26], [255, 39, 25], [255, 42, 25], [255, 45, 25],
    [255, 48, 24], [255, 51, 24], [255, 54, 24], [255, 57, 23],
    [255, 60, 23], [255, 63, 22], [255, 66, 22], [255, 69, 22],
    [255, 72, 21], [255, 75, 21], [255, 78, 21], [255, 81, 20],
    [255, 84, 20], [255, 87, 20], [255, 90, 19], [255, 93, 19],
    [255, 96, 19], [255, 99, 18], [255, 102, 18], [255, 105, 18],
    [255, 108, 17], [255, 111, 17], [255, 114, 16], [255, 117, 16],
    [255, 120, 16], [255, 123, 15], [255, 126, 15], [255, 129, 15],
    [255, 131, 14], [255, 134, 14], [255, 137, 14], [255, 140, 13],
    [255, 143, 13], [255, 146, 13], [255, 149, 12], [255, 152, 12],
    [255, 155, 11], [255, 158, 11], [255, 161, 11], [255, 164, 10],
    [255, 167, 10], [255, 170, 10], [255, 173, 9], [255, 176, 9],
    [255, 177, 10], [255, 179, 10], [255, 180, 11], [255, 181, 11],
    [255, 182, 12], [255, 183, 12], [255, 185, 13], [255, 186, 13],
    [255, 187, 14], [255, 188, 15], [255, 189, 15], [255, 191, 16],
    [255, 192, 16], [255, 193, 17], [255, 194, 17], [255, 195, 18],
    [255, 197, 18], [255, 198, 19], [255, 199, 19], [255, 200, 20],
    [255, 201, 21], [255, 203, 21], [255, 204, 22], [255, 205, 22],
    [255, 206, 23], [255, 207, 23], [255, 209, 24], [255, 210, 24],
    [255, 211, 25], [255, 212, 26], [255, 213, 26], [255, 215, 27],
    [255, 216, 27], [255, 217, 28], [255, 218, 28], [255, 220, 29],
    [255, 221, 29], [255, 222, 30], [255, 223, 31], [255, 224, 31],
    [255, 226, 32], [255, 227, 32], [255, 228, 33], [255, 229, 33],
    [255, 230, 34], [255, 232, 34], [255, 233, 35], [255, 234, 36],
    [255, 235, 36], [255, 236, 37], [255, 238, 37], [255, 239, 38],
    [255, 240, 38], [255, 241, 39], [255, 241, 43], [255, 242, 47],
    [255, 242, 51], [255, 242, 55], [255, 242, 58], [255, 243, 62],
    [255, 243, 66], [255, 243, 70], [255, 243, 74], [255, 244, 78],
    [255, 244, 82], [255, 244, 86], [255, 244, 90], [255, 245, 94],
    [255, 245, 98], [255, 245, 102], [255, 245, 105], [255, 246, 109],
    [255, 246, 113], [255, 246, 117], [255, 246, 121], [255, 247, 125],
    [255, 247, 129], [255, 247, 133], [255, 247, 137], [255, 248, 141],
    [255, 248, 145], [255, 248, 149], [255, 248, 153], [255, 248, 156],
    [255, 249, 160], [255, 249, 164], [255, 249, 168], [255, 249, 172],
    [255, 250, 176], [255, 250, 180], [255, 250, 184], [255, 250, 188],
    [255, 251, 192], [255, 251, 196], [255, 251, 200], [255, 251, 204],
    [255, 252, 207], [255, 252, 211], [255, 252, 215], [255, 252, 219],
    [255, 253, 223], [255, 253, 227], [255, 253, 231], [255, 253, 235],
    [255, 254, 239], [255, 254, 243], [255, 254, 247], [255, 254, 251],
];

/// Identity ramp: sample `i` carries opacity `i / 255`.
pub(crate) const LINEAR_FULL: [u8; 256] = identity_ramp();

const fn identity_ramp() -> [u8; 256] {
    let mut out = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        out[i] = i as u8;
        i += 1;
    }
    out
}
