mod number_theory;
