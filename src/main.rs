fn main() {
    aoc_slack_leaderboard::main()
}
