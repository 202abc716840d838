fn main() {
    bunny_defender::game::run();
}
