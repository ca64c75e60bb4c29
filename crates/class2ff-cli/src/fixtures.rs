//! Minimal library and connectivity inputs for command tests.

pub(crate) const WATER_LIBRARY: &str = "\
#atom_types	compass
 2.1  1    h1o     1.007970    H          1      hydroxyl hydrogen
 2.1  1    o2h    15.999400    O          2      hydroxyl oxygen

#equivalence	compass
 2.1  1     h1o   h1o      h1o     h1o      h1o        h1o
 2.1  1     o2h   o2h      o2h     o2h      o2h        o2h

#quartic_bond	compass
 2.1  1      h1o   o2h       0.9700    563.2800  -1428.2200   1902.1200

#quartic_angle	compass
 2.1  1      h1o   o2h   h1o    103.7000    49.8400   -11.6000   -8.0000

#bond-bond	compass
 2.1  1      h1o   o2h   h1o     -9.5000

#bond-bond_1_3	compass

#bond-angle	compass
 2.1  1      h1o   o2h   h1o     22.3500

#torsion_3	compass

#end_bond-torsion_3	compass

#middle_bond-torsion_3	compass

#angle-torsion_3	compass

#wilson_out_of_plane	compass

#angle-angle	compass

#angle-angle-torsion_1	compass

#nonbond(9-6)	compass
 2.1  1      h1o       1.0980     0.0130
";

pub(crate) const WATER_GRAPH: &str = "\
[[atoms]]
type = \"h1o\"
neighbors = [1]

[[atoms]]
type = \"o2h\"
neighbors = [0, 2]

[[atoms]]
type = \"h1o\"
neighbors = [1]
";
