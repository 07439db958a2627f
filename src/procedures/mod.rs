/*!
Procedures, from which the algorithm for determining satisfiability is built.

- [bcp] --- boolean constraint propagation with watched literals.
- [theory] --- consultation of an external theory solver at propagation
  fixpoints.
- [analysis] --- first unique implication point conflict analysis.
- [backjump] --- recovery from a conflict.
- [decision] --- choosing the value of an atom.
- [solve] --- the loop tying the above together, with restarts.
*/

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
pub mod theory;
