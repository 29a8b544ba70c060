mod point_sets;
