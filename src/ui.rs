pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>LeetCode Tracker</title>
  <style>
    :root {
      --bg-1: #f6f4ef;
      --bg-2: #dde7f0;
      --ink: #23282e;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 26px;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      flex-wrap: wrap;
      gap: 8px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3.5vw, 2.3rem);
    }

    .date {
      color: #70798a;
      font-size: 1rem;
    }

    .chart-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      flex-wrap: wrap;
      gap: 10px;
    }

    h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .tabs {
      display: inline-flex;
      gap: 6px;
    }

    .tab {
      border: 1px solid rgba(47, 72, 88, 0.25);
      background: transparent;
      color: var(--accent-2);
      border-radius: 999px;
      padding: 6px 16px;
      font-size: 0.9rem;
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent-2);
      color: #fff;
    }

    .chart-card {
      background: #fbfaf7;
      border: 1px solid rgba(47, 72, 88, 0.1);
      border-radius: 16px;
      padding: 12px;
    }

    svg {
      width: 100%;
      height: auto;
      display: block;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      font-size: 0.9rem;
    }

    .legend .swatch {
      display: inline-block;
      width: 22px;
      height: 4px;
      border-radius: 2px;
      margin-right: 6px;
      vertical-align: middle;
    }

    .board {
      display: grid;
      gap: 10px;
    }

    .rank-item {
      display: flex;
      align-items: center;
      gap: 14px;
      background: #fbfaf7;
      border: 1px solid rgba(47, 72, 88, 0.1);
      border-radius: 14px;
      padding: 12px 16px;
    }

    .rank-badge {
      font-weight: 700;
      font-size: 1.1rem;
      color: var(--accent);
      min-width: 2.2rem;
    }

    .rank-info {
      flex: 1;
    }

    .rank-name {
      font-weight: 600;
    }

    .rank-sub {
      font-size: 0.85rem;
      color: #70798a;
      margin-top: 2px;
    }

    .rank-score {
      font-size: 1.4rem;
      font-weight: 700;
      color: var(--accent-2);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: #9a2f20;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>LeetCode Tracker</h1>
      <span class="date" id="date">{{DATE}}</span>
    </header>

    <section>
      <div class="chart-header">
        <h2 id="chart-title">Problems solved over time</h2>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-mode="cumulative" role="tab" aria-selected="true">Progress</button>
          <button class="tab" type="button" data-mode="daily" role="tab" aria-selected="false">Daily activity</button>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 640 280" aria-label="Problems chart" role="img"></svg>
      </div>
      <div class="legend" id="legend"></div>
    </section>

    <section>
      <h2>Leaderboard</h2>
      <div class="board" id="board"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const legendEl = document.getElementById('legend');
    const boardEl = document.getElementById('board');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const palette = ['#FF006E', '#00D9FF', '#FFBE0B', '#FF8C00'];
    let mode = 'cumulative';
    let streaksByUser = {};

    const setStatus = (message) => {
      statusEl.textContent = message || '';
    };

    const seriesColor = (line, index) => line.color || palette[index % palette.length];

    const renderChart = (data) => {
      const width = 640;
      const height = 280;
      const pad = 40;

      const values = data.series
        .flatMap((line) => line.points)
        .filter((v) => v !== null && v !== undefined);
      if (!data.dates.length || !values.length) {
        chartEl.innerHTML = '<text x="50%" y="50%" text-anchor="middle" fill="#70798a">No data yet</text>';
        legendEl.innerHTML = '';
        return;
      }

      let min = Math.min(...values);
      let max = Math.max(...values);
      if (min === max) {
        min -= 1;
        max += 1;
      }
      const x = (i) => data.dates.length === 1
        ? width / 2
        : pad + (i * (width - 2 * pad)) / (data.dates.length - 1);
      const y = (v) => height - pad - ((v - min) * (height - 2 * pad)) / (max - min);

      const parts = [];
      parts.push(`<line x1="${pad}" y1="${height - pad}" x2="${width - pad}" y2="${height - pad}" stroke="#c8cdd6"/>`);
      parts.push(`<text x="${pad - 6}" y="${y(max) + 4}" text-anchor="end" font-size="11" fill="#70798a">${max}</text>`);
      parts.push(`<text x="${pad - 6}" y="${y(min) + 4}" text-anchor="end" font-size="11" fill="#70798a">${min}</text>`);
      parts.push(`<text x="${pad}" y="${height - pad + 16}" font-size="11" fill="#70798a">${data.dates[0]}</text>`);
      parts.push(`<text x="${width - pad}" y="${height - pad + 16}" text-anchor="end" font-size="11" fill="#70798a">${data.dates[data.dates.length - 1]}</text>`);

      data.series.forEach((line, index) => {
        const color = seriesColor(line, index);
        let segment = [];
        const segments = [];
        line.points.forEach((value, i) => {
          if (value === null || value === undefined) {
            if (segment.length) segments.push(segment);
            segment = [];
          } else {
            segment.push(`${x(i)},${y(value)}`);
          }
        });
        if (segment.length) segments.push(segment);
        segments.forEach((points) => {
          parts.push(`<polyline points="${points.join(' ')}" fill="none" stroke="${color}" stroke-width="3"/>`);
        });
      });

      chartEl.innerHTML = parts.join('');
      legendEl.innerHTML = data.series
        .map((line, index) =>
          `<span><span class="swatch" style="background:${seriesColor(line, index)}"></span>${line.display_name}</span>`)
        .join('');
    };

    const renderBoard = (board, today) => {
      const todayByUser = {};
      (today.entries || []).forEach((entry) => {
        todayByUser[entry.username] = entry.solved;
      });

      boardEl.innerHTML = board.entries
        .map((entry) => {
          const streak = streaksByUser[entry.username];
          const streakText = streak
            ? ` &middot; streak ${streak.current} (best ${streak.max})`
            : '';
          return `
            <div class="rank-item">
              <div class="rank-badge">#${entry.rank}</div>
              <div class="rank-info">
                <div class="rank-name">${entry.display_name}</div>
                <div class="rank-sub">Today: +${todayByUser[entry.username] || 0}${streakText}</div>
              </div>
              <div class="rank-score">${entry.score}</div>
            </div>`;
        })
        .join('');
    };

    const fetchJson = async (url) => {
      const res = await fetch(url, { cache: 'no-store' });
      if (!res.ok) {
        throw new Error(await res.text() || `request failed: ${url}`);
      }
      return res.json();
    };

    const loadChart = async () => {
      const query = mode === 'daily' ? 'mode=daily&days=30&missing=gap' : 'mode=cumulative';
      renderChart(await fetchJson(`/api/series?${query}`));
    };

    const refresh = async () => {
      try {
        const streaks = await fetchJson('/api/streaks');
        streaksByUser = {};
        streaks.streaks.forEach((record) => {
          streaksByUser[record.username] = record;
        });

        const [board, today] = await Promise.all([
          fetchJson('/api/leaderboard?by=total'),
          fetchJson('/api/today')
        ]);
        document.getElementById('date').textContent = today.date;
        renderBoard(board, today);
        await loadChart();
        setStatus('');
      } catch (err) {
        setStatus(err.message);
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        mode = button.dataset.mode;
        tabs.forEach((tab) => {
          const active = tab === button;
          tab.classList.toggle('active', active);
          tab.setAttribute('aria-selected', String(active));
        });
        document.getElementById('chart-title').textContent =
          mode === 'daily' ? 'Problems solved per day (last 30)' : 'Problems solved over time';
        loadChart().catch((err) => setStatus(err.message));
      });
    });

    refresh();
    setInterval(refresh, 5 * 60 * 1000);
  </script>
</body>
</html>
"##;
