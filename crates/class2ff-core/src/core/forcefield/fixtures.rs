//! Small class2 library used across unit tests.

pub(crate) const SAMPLE_LIBRARY: &str = r#"!BIOSYM forcefield          1

#version compass.frc	1.0	1-Jan-2026

#define compass

> Sample subset of a class2 library

#atom_types	compass

> Atom type definitions

!Ver  Ref  Type    Mass      Element   connection   Comment
!---- ---  ----  ----------  -------   ----------------------------------------
 2.1  1    c4     12.011150    C          4      generic SP3 carbon
 2.1  1    c4o    12.011150    C          4      SP3 carbon bonded to oxygen
 2.1  1    h1      1.007970    H          1      nonpolar hydrogen
 2.1  1    o2     15.999400    O          2      generic SP3 oxygen
 2.1  1    c3a    12.011150    C          3      aromatic carbon

#equivalence	compass

!                      Equivalences
!                 -----------------------------------------
!Ver  Ref   Type  NonB     Bond    Angle    Torsion    OOP
!---- ---   ----  ----     ----    -----    -------    ----
 2.1  1     c4    c4       c4      c4       c4         c4
 2.1  1     c4o   c4o      c4      c4       c4         c4
 2.1  1     h1    h1       h1      h1       h1         h1
 2.1  1     o2    o2       o2      o2       o2         o2
 2.1  1     c3a   c3a      c3a     c3a      c3a        c3a

#quartic_bond	compass

> E = K2 * (R - R0)^2  +  K3 * (R - R0)^3  +  K4 * (R - R0)^4

!Ver  Ref     I     J          R0         K2          K3          K4
!---- ---    ----  ----     -------    --------    ---------    --------
 2.1  1      c4    c4        1.5300    299.6700   -501.7700    679.8100
 2.1  1      h1    c4        1.1010    345.0000   -691.8900    844.6000
 2.1  1      c4    o2        1.4200    400.3954   -835.1951   1313.0142
 2.1  1      h1    o2        0.9700    563.2800  -1428.2200   1902.1200

#quartic_angle	compass

!Ver  Ref     I     J     K       Theta0         K2        K3        K4
!---- ---    ----  ----  ----    --------     -------  --------   -------
 2.1  1      h1    c4    c4     112.6700    39.5160   -7.4430   -9.5583
 2.1  1      h1    c4    h1     107.6600    39.6410  -12.9210   -2.4318
 2.1  1      c4    o2    h1     105.8000    52.7061  -12.1090   -9.8681
 2.1  1      h1    c4    o2     107.6300    63.9600  -13.1800  -22.8000
 2.1  1      c4    c4    o2     111.2700    54.5381   -8.3642  -13.0838

#bond-bond	compass

!Ver  Ref     I     J     K        K(b,b')
!---- ---    ----  ----  ----    --------
 2.1  1      c4    c4    h1       3.3872
 2.1  1      h1    c4    h1       5.3316

#bond-bond_1_3	compass

!Ver  Ref     I     J     K     L       K(b,b')
!---- ---    ----  ----  ----  ----    --------
 2.1  1      h1    c4    c4    h1       0.0000

#bond-angle	compass

!Ver  Ref     I     J     K        K(b,theta)  K(b',theta)
!---- ---    ----  ----  ----    -----------  -----------
 2.1  1      h1    c4    c4      11.4210      20.7540
 2.1  1      h1    c4    h1      18.1030

#torsion_3	compass

!Ver  Ref     I     J     K     L         V1     Phi1      V2     Phi2      V3     Phi3
!---- ---    ----  ----  ----  ----    -------  ------  -------  ------  -------  ------
 2.1  1      h1    c4    c4    h1      -0.1432    0.0    0.2530    0.0   -0.0905    0.0
 2.1  1      *     c4    o2    *        0.0000    0.0    0.0000    0.0    0.1000    0.0
 2.1  1      c4    c4    o2    *        0.1000    0.0    0.2000    0.0    0.3000    0.0

#end_bond-torsion_3	compass

!Ver  Ref     I     J     K     L        B1       B2       B3       C1       C2       C3
!---- ---    ----  ----  ----  ----   -------  -------  -------  -------  -------  -------
 2.1  1      h1    c4    c4    h1      0.2486   0.2422  -0.0925
 2.1  1      o2    c4    c4    h1      0.1000   0.2000   0.3000   0.4000   0.5000   0.6000

#middle_bond-torsion_3	compass

!Ver  Ref     I     J     K     L        A1        A2        A3
!---- ---    ----  ----  ----  ----   -------   -------   -------
 2.1  1      h1    c4    c4    h1    -14.2610   -0.5322   -0.4864

#angle-torsion_3	compass

!Ver  Ref     I     J     K     L        B1       B2       B3       C1       C2       C3
!---- ---    ----  ----  ----  ----   -------  -------  -------  -------  -------  -------
 2.1  1      h1    c4    c4    h1     -0.8085   0.5569  -0.2466

#wilson_out_of_plane	compass

!Ver  Ref     I     J     K     L           KChi      Chi0
!---- ---    ----  ----  ----  ----    -------   -------
 2.1  1      c3a   c3a   c3a   h1       4.8912    0.0000

#angle-angle	compass

!Ver  Ref     I     J     K     L       K(theta,theta')
!---- ---    ----  ----  ----  ----    ----------------
 2.1  1      c4    c4    h1    h1      -1.3199
 2.1  1      h1    c4    c4    h1      -0.4825
 2.1  1      h1    c4    h1    h1       0.2738

#angle-angle-torsion_1	compass

!Ver  Ref     I     J     K     L       K(Ang,Ang,Tor)
!---- ---    ----  ----  ----  ----    --------------
 2.1  1      h1    c4    c4    h1     -12.5640

#nonbond(9-6)	compass

@type r-eps
@combination sixth-power

!Ver  Ref     I          r          eps
!---- ---    ----    ---------  ---------
 2.1  1      c4        3.8540     0.0620
 2.1  1      h1        2.8780     0.0230
 2.1  1      o2        3.5350     0.2400
 2.1  1      c3a       3.9150     0.0680

#bond_increments	compass

!Ver  Ref     I     J       DeltaIJ     DeltaJI
!---- ---    ----  ----    -------     -------
 2.1  1      c4    h1      -0.0530      0.0530
"#;
